//! Quick performance check for the hot paths.
//!
//! Prints ns/op for each operation next to a rough target.

use packed_bits::BitArray;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;

fn measure<F>(name: &str, target_ns: f64, iterations: usize, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..100 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let ns_per_op = elapsed.as_nanos() as f64 / iterations as f64;

    let status = if ns_per_op <= target_ns {
        "PASS"
    } else if ns_per_op <= target_ns * 1.2 {
        "CLOSE"
    } else {
        "MISS"
    };

    println!(
        "{:34} {:8.1}ns (target: {:6.0}ns) [{}]",
        name, ns_per_op, target_ns, status
    );
}

fn main() {
    println!("\n=== Packed Bits Performance Check ===\n");

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let mut ba = BitArray::new();
    ba.set(9999, false);

    // Individual bit operations
    measure("set", 3.0, 1_000_000, || {
        ba.set(black_box(5000), true);
    });

    measure("is_set", 2.0, 1_000_000, || {
        black_box(ba.is_set(black_box(5000)));
    });

    measure("set_keep_len", 3.0, 1_000_000, || {
        ba.set_keep_len(black_box(5000), false);
    });

    // Iteration over 1024 bits at 2% density
    let mut sparse = BitArray::new();
    sparse.set(1023, false);
    for i in 0..1024 {
        if rng.gen_bool(0.02) {
            sparse.set(i, true);
        }
    }

    measure("set_bits (1024b, 2%)", 60.0, 100_000, || {
        black_box(sparse.set_bits().count());
    });

    measure("naive is_set scan (1024b, 2%)", 600.0, 100_000, || {
        black_box((0..sparse.num()).filter(|&i| sparse.is_set(i)).count());
    });

    measure("dense iter (1024b)", 600.0, 100_000, || {
        black_box(sparse.iter().filter(|&b| b).count());
    });

    // Bulk clearing keeps capacity
    let mut big = BitArray::new();
    big.set(1023, true);
    measure("zero_all (1024b)", 60.0, 100_000, || {
        big.set(black_box(512), true);
        big.zero_all();
    });

    println!("\n=== Summary ===");
    println!("PASS: Meets target");
    println!("CLOSE: Within 20% of target");
    println!("MISS: Exceeds target by >20%");
}
