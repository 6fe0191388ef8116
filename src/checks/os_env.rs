use crate::error::{ProbeError, Result};
use std::env;
use std::path::Path;
use walkdir::WalkDir;

/// OS 상태 조회 체크: cwd, 로그인 사용자, HOME, 디렉토리 목록
pub fn run() -> Result<()> {
    println!("cwd: {}", env::current_dir()?.display());
    println!("user: {}", login_name()?);

    // HOME은 없을 수 있으므로 센티널로 대체 (치명적 아님)
    match env::var("HOME") {
        Ok(home) => println!("HOME: {}", home),
        Err(_) => println!("HOME: (not set)"),
    }

    println!("listdir: {:?}", list_dir(".")?);
    println!("exists .: {}", Path::new(".").exists());
    println!("isdir .: {}", Path::new(".").is_dir());

    Ok(())
}

/// 로그인 사용자 이름. USER가 없으면 USERNAME으로 폴백, 둘 다 없으면 에러.
fn login_name() -> Result<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .map_err(|_| ProbeError::MissingEnvVar("USER".to_string()))
}

/// 디렉토리 1단계 목록 (정렬된 항목 이름)
fn list_dir(path: &str) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }
    entries.sort();
    Ok(entries)
}
