use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 스코프 기반 스크래치 디렉토리 가드
///
/// `create`로 획득하고 `remove`로 명시적으로 해제합니다. `remove` 실패는
/// 호출자에게 전파됩니다. 해제 전에 스코프를 벗어나면 Drop이 best-effort로
/// 디렉토리를 정리하므로, 중간에 실패한 실행도 디렉토리를 남기지 않습니다.
pub struct ScratchDir {
    path: PathBuf,
    released: bool,
}

impl ScratchDir {
    /// 디렉토리 생성. 경로가 이미 존재하거나 권한이 없으면 에러.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::create_dir(&path)?;
        Ok(Self {
            path,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 명시적 해제. 실패 시 에러를 전파하고 Drop 백스톱이 재시도합니다.
    pub fn remove(mut self) -> Result<()> {
        fs::remove_dir(&self.path)?;
        self.released = true;
        Ok(())
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.released {
            let _ = fs::remove_dir(&self.path);
        }
    }
}

/// mkdir/rmdir 체크: 생성 확인 후 즉시 제거
pub fn run() -> Result<()> {
    let scratch = ScratchDir::create("test_dir")?;
    println!("Created test_dir");
    println!("Exists: {}", scratch.exists());
    scratch.remove()?;
    println!("Removed test_dir");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_path(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("pysmoke_scratch_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_create_verify_remove_cycle() {
        let path = scratch_path("cycle");
        let _ = fs::remove_dir(&path);

        let scratch = ScratchDir::create(&path).unwrap();
        assert_eq!(scratch.path(), path);
        assert!(scratch.exists());
        scratch.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_releases_on_early_exit() {
        let path = scratch_path("drop");
        let _ = fs::remove_dir(&path);

        {
            let scratch = ScratchDir::create(&path).unwrap();
            assert!(scratch.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_create_fails_when_path_exists() {
        let path = scratch_path("exists");
        let _ = fs::remove_dir(&path);
        fs::create_dir(&path).unwrap();

        assert!(ScratchDir::create(&path).is_err());
        // 실패한 획득은 기존 디렉토리를 건드리지 않는다
        assert!(path.exists());

        fs::remove_dir(&path).unwrap();
    }
}
