use livemask::{report, LivenessMask};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
	let mut rng = StdRng::seed_from_u64(2024);
	let mask = LivenessMask::random(128, 9, &mut rng).unwrap();
	let stats = report::measure(&mask).unwrap();
	println!("mask {}", mask);
	println!("compressed {} commitments -> {} bits", stats.total, stats.compressed_bits);
	println!("round trip {}", if stats.round_trip_ok { "pass" } else { "fail" });
}
