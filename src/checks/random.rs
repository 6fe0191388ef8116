use crate::error::Result;
use rand::Rng;

/// 난수 소스 체크
pub fn run() -> Result<()> {
    let mut rng = rand::thread_rng();
    println!("random: {}", uniform(&mut rng));
    println!("randint: {}", randint(&mut rng, 1, 100));

    Ok(())
}

/// `[0, 1)` 구간의 균등 분포 실수
fn uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.gen()
}

/// `[low, high]` 닫힌 구간의 균등 분포 정수
fn randint<R: Rng>(rng: &mut R, low: i32, high: i32) -> i32 {
    rng.gen_range(low..=high)
}
