use colored::*;

const BANNER_WIDTH: usize = 50;
const RULE_WIDTH: usize = 30;

/// 상단/하단 배너 출력
pub fn print_banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("  {}", title.bold());
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// 번호가 붙은 섹션 헤더 출력
pub fn print_section(index: usize, title: &str) {
    println!("{}", format!("[{}] {}", index, title).cyan().bold());
    println!("{}", "-".repeat(RULE_WIDTH));
}
