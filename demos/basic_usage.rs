use vector_math::{
    config::ToleranceConfig,
    utils::{cosine_similarity, euclidean_distance, generate_random_vectors},
    vector::Vector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📐 Vector Arithmetic Demo");
    println!("=========================\n");

    let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_vec(vec![4.0, 5.0, 6.0]);
    println!("a = {}", a);
    println!("b = {}", b);

    // Elementwise operations
    println!("\n➕ Elementwise operations");
    println!("  a + b     = {}", a.add(&b)?);
    println!("  a - b     = {}", a.sub(&b)?);
    println!("  -a        = {}", -&a);
    println!("  a ∘ b     = {}", a.hadamard_product(&b)?);

    // Aggregates
    println!("\n📏 Aggregates");
    println!("  sum(a)    = {}", a.sum());
    println!("  a · b     = {}", a.dot(&b)?);
    println!("  |a|       = {:.6}", a.length());
    println!("  ∠(a, b)   = {:.6} rad", a.angle(&b)?);
    println!("  a × b     = {}", a.cross(&b)?);

    // Tolerance-based comparison
    println!("\n🔍 Approximate comparison");
    let nudged = Vector::from_vec(vec![1.0, 2.0, 3.0000001]);
    let loose = ToleranceConfig::from_json(r#"{"epsilon": 1e-6}"#)?;
    println!("  a ≈ {} (eps 1e-6): {}", nudged, a.approx_eq(&nudged, &loose));
    println!(
        "  a ≈ {} (eps 1e-9): {}",
        nudged,
        a.approx_eq(&nudged, &ToleranceConfig::default())
    );

    // Failure conditions are returned, not raised
    println!("\n⚠️  Invalid input");
    let short = Vector::from_vec(vec![1.0, 2.0]);
    if let Err(e) = short.add(&a) {
        println!("  add:   {}", e);
    }
    if let Err(e) = Vector::zeros(3).angle(&a) {
        println!("  angle: {}", e);
    }
    if let Err(e) = short.cross(&a) {
        println!("  cross: {}", e);
    }

    // Random data
    println!("\n🎲 Random 128-dimensional vectors");
    let vectors = generate_random_vectors(128, 2);
    println!("  distance:   {:.4}", euclidean_distance(&vectors[0], &vectors[1])?);
    println!("  similarity: {:.4}", cosine_similarity(&vectors[0], &vectors[1])?);

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
