use crate::error::Result;
use std::collections::BTreeMap;

/// 매핑/함수 호출 체크
pub fn run() -> Result<()> {
    let mut d = BTreeMap::new();
    d.insert("a", 1);
    d.insert("b", 2);
    println!("dict: {:?}", d);
    println!("keys: {:?}", d.keys().collect::<Vec<_>>());

    println!("func: {}", greet("Python"));

    Ok(())
}

/// 인사말 생성 함수
fn greet(name: &str) -> String {
    format!("Hi {}", name)
}
