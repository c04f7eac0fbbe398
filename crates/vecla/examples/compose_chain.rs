//! Compose a transform chain with the builder and apply it to a square.
//!
//! Run: `cargo run -p vecla --example compose_chain`

use std::f64::consts::FRAC_PI_4;

use vecla::prelude::*;

fn main() {
    let square = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    // Scale first, then rotate, then move: call order is application order.
    let m = MatrixBuilder::new()
        .scale(2.0, 2.0)
        .rotate(FRAC_PI_4)
        .translate(5.0, -1.0)
        .done();

    println!("matrix={:?}", m.to_array());
    println!("det={:.6}", determinant(&m));
    for p in square {
        let q = transform(p, &m);
        println!("({:.3}, {:.3}) -> ({:.3}, {:.3})", p.x, p.y, q.x, q.y);
    }
    let c = midpoint(square[0], square[2]);
    println!("center -> {:?}", transform(c, &m));
}
