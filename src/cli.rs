use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pysmoke")]
#[command(version)]
#[command(about = "Sequential smoke-test probe for the Python simulator runtime", long_about = None)]
pub struct Cli {
    /// 디버그 모드 (파싱된 CLI와 체크별 소요 시간 출력)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 체크 목록만 출력하고 실행하지 않음
    #[arg(long)]
    pub list: bool,
}
