use crate::error::Result;
use crate::mask::LivenessMask;
use rand::Rng;

/// Outcome of compressing one mask and checking the round trip.
#[derive(Debug)]
pub struct CompressionReport {
	pub total: usize,
	pub live: usize,
	pub fraction_live: f64,
	pub compressed_bits: usize,
	pub bits_per_live: f64,
	pub round_trip_ok: bool,
}

/// Compresses the mask, decompresses the result and reports how it went.
pub fn measure(mask: &LivenessMask) -> Result<CompressionReport> {
	let bits = mask.compress()?;
	let restored = LivenessMask::decompress(&bits)?;

	let total = mask.len();
	let live = mask.count_live();
	let fraction_live = if total > 0 { live as f64 / total as f64 } else { 0.0 };
	let bits_per_live = if live > 0 { bits.len() as f64 / live as f64 } else { 0.0 };

	log::debug!("mask of {} commitments compressed to {} bits", total, bits.len());

	Ok(CompressionReport {
		total,
		live,
		fraction_live,
		compressed_bits: bits.len(),
		bits_per_live,
		round_trip_ok: restored == *mask,
	})
}

/// Generates a random mask and measures it, the driver behind `livemask report`.
pub fn random_report<R: Rng + ?Sized>(
	total: usize,
	live: usize,
	rng: &mut R,
) -> Result<(LivenessMask, CompressionReport)> {
	let mask = LivenessMask::random(total, live, rng)?;
	let report = measure(&mask)?;
	Ok((mask, report))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	#[test]
	fn test_measure_round_trip() {
		let mask = LivenessMask::from_text("01001010").unwrap();
		let report = measure(&mask).unwrap();

		assert!(report.round_trip_ok);
		assert_eq!(report.total, 8);
		assert_eq!(report.live, 3);
		assert!((report.fraction_live - 0.375).abs() < f64::EPSILON);
		assert!(report.compressed_bits > 0);
	}

	#[test]
	fn test_measure_empty_mask() {
		let mask = LivenessMask::from_text("").unwrap();
		let report = measure(&mask).unwrap();

		assert!(report.round_trip_ok);
		assert_eq!(report.fraction_live, 0.0);
		assert_eq!(report.bits_per_live, 0.0);
	}

	#[test]
	fn test_random_report() {
		let mut rng = StdRng::seed_from_u64(3);
		let (mask, report) = random_report(200, 20, &mut rng).unwrap();

		assert_eq!(mask.len(), 200);
		assert_eq!(report.live, 20);
		assert!(report.round_trip_ok);
	}

	#[test]
	fn test_out_of_range_live_rejected() {
		let mut rng = StdRng::seed_from_u64(3);
		assert!(random_report(10, 11, &mut rng).is_err());
	}
}
