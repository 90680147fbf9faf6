//! Recording archiver for tests.

use std::sync::Mutex;

use super::{ArchiveRequest, Archiver, ArchiverError};

/// Records every request and answers with a canned outcome.
pub struct FakeArchiver {
    failure: Option<Option<String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeArchiver {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(diagnostic: Option<&str>) -> Self {
        Self {
            failure: Some(diagnostic.map(String::from)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Argument lists the archiver would have been run with.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Archiver for FakeArchiver {
    async fn create_archive(&self, request: &ArchiveRequest) -> Result<(), ArchiverError> {
        self.calls.lock().unwrap().push(request.to_args());
        match &self.failure {
            None => Ok(()),
            Some(diagnostic) => Err(ArchiverError::failed(diagnostic.clone(), Some(2))),
        }
    }
}
