use crate::domain::model::FetchOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn follow_up_endpoint(&self) -> &str;
    fn fields(&self) -> &[String];
    fn timeout_secs(&self) -> u64;
    fn max_items(&self) -> usize;
    fn top_k(&self) -> usize;
}

/// Yes/no gate in front of the follow-up fetch.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}
