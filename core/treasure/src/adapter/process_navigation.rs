//! 外部地図アプリ起動: 行き先 URI を組み立てて OS のオープナーに渡す

use crate::ports::outbound::NavigationLauncher;
use common::error::Error;
use common::geo::Coordinate;
use common::ports::outbound::Process;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_OPENER: &str = "xdg-open";

/// 経路案内の URI を組み立てる
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "externalmaps:?destination={},{}&mode=driving",
        destination.latitude, destination.longitude
    )
}

/// URI をサブプロセス経由で OS に開かせる NavigationLauncher 実装
pub struct ProcessNavigationLauncher {
    process: Arc<dyn Process>,
    opener: PathBuf,
}

impl ProcessNavigationLauncher {
    pub fn new(process: Arc<dyn Process>) -> Self {
        Self {
            process,
            opener: PathBuf::from(DEFAULT_OPENER),
        }
    }

    pub fn with_opener(process: Arc<dyn Process>, opener: impl Into<PathBuf>) -> Self {
        Self {
            process,
            opener: opener.into(),
        }
    }
}

impl NavigationLauncher for ProcessNavigationLauncher {
    fn open_driving_directions(&self, destination: Coordinate) -> Result<(), Error> {
        let url = directions_url(destination);
        let code = self
            .process
            .run(&self.opener, &[url])
            .map_err(|e| Error::launch_failed(format!("Failed to open maps app: {}", e)))?;
        if code != 0 {
            return Err(Error::launch_failed(format!(
                "{} exited with code {}",
                self.opener.display(),
                code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    #[test]
    fn test_directions_url_format() {
        let url = directions_url(Coordinate::new(43.657703, -79.384209));
        assert_eq!(
            url,
            "externalmaps:?destination=43.657703,-79.384209&mode=driving"
        );
    }

    struct RecordingProcess {
        calls: Mutex<Vec<(String, Vec<String>)>>,
        exit_code: i32,
    }

    impl Process for RecordingProcess {
        fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((program.display().to_string(), args.to_vec()));
            Ok(self.exit_code)
        }
    }

    #[test]
    fn test_launcher_passes_url_to_opener() {
        let process = Arc::new(RecordingProcess {
            calls: Mutex::new(Vec::new()),
            exit_code: 0,
        });
        let launcher = ProcessNavigationLauncher::new(Arc::clone(&process) as Arc<dyn Process>);
        launcher
            .open_driving_directions(Coordinate::new(43.65, -79.38))
            .unwrap();
        let calls = process.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "xdg-open");
        assert_eq!(
            calls[0].1,
            vec!["externalmaps:?destination=43.65,-79.38&mode=driving".to_string()]
        );
    }

    #[test]
    fn test_launcher_nonzero_exit_is_launch_failed() {
        let process = Arc::new(RecordingProcess {
            calls: Mutex::new(Vec::new()),
            exit_code: 3,
        });
        let launcher = ProcessNavigationLauncher::new(process);
        let err = launcher
            .open_driving_directions(Coordinate::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, Error::LaunchFailed(_)));
    }
}
