use crate::error::Result;

/// 문자열 변환/토큰화 체크
pub fn run() -> Result<()> {
    let s = "Hello World";
    println!("upper: {}", s.to_uppercase());
    println!("lower: {}", s.to_lowercase());
    println!("split: {:?}", tokenize(s));

    Ok(())
}

/// 공백 기준 토큰화
fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_transforms() {
        assert_eq!("Hello World".to_uppercase(), "HELLO WORLD");
        assert_eq!("Hello World".to_lowercase(), "hello world");
    }

    #[test]
    fn test_tokenize_on_whitespace() {
        assert_eq!(tokenize("Hello World"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_tokenize_collapses_runs_of_whitespace() {
        assert_eq!(tokenize("  Hello \t World  "), vec!["Hello", "World"]);
    }
}
