use crate::domain::model::Accommodation;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn affiliate_id(&self) -> &str;
    fn output_suffix(&self) -> &str;
    fn extractor_kind(&self) -> &str;
    fn extractor_endpoint(&self) -> &str;
    fn extractor_model(&self) -> &str;
}

/// The extraction collaborator. The engine only assumes the returned records
/// keep a meaningful priority order and that `name` is present (possibly empty).
#[async_trait]
pub trait AccommodationExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<Accommodation>>;
}

#[async_trait]
impl<T: AccommodationExtractor + ?Sized> AccommodationExtractor for Box<T> {
    async fn extract(&self, text: &str) -> Result<Vec<Accommodation>> {
        (**self).extract(text).await
    }
}
