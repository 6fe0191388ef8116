use crate::error::Result;

/// 수학 상수/함수 체크
pub fn run() -> Result<()> {
    println!("pi: {}", std::f64::consts::PI);
    println!("sqrt(16): {}", 16.0_f64.sqrt());
    println!("floor(3.7): {}", 3.7_f64.floor());

    Ok(())
}
