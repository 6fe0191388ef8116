use crate::error::Result;

/// 기본 컨테이너/반복 체크
pub fn run() -> Result<()> {
    let jours = vec!["lundi", "mardi", "mercredi", "jeudi"];
    println!("Liste: {:?}", jours);
    println!("Len: {}", jours.len());
    println!("First: {}", jours[0]);

    for i in 0..3 {
        println!("Loop: {}", i);
    }

    println!("Squares: {:?}", squares(5));

    Ok(())
}

/// `0..upto` 범위의 각 원소를 제곱한 시퀀스
fn squares(upto: i32) -> Vec<i32> {
    (0..upto).map(|x| x * x).collect()
}
