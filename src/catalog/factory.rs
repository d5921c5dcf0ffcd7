use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_catalog_service(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(config, book_repository))
}
