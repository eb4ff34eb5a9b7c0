use crate::core::ProductStore;
use crate::domain::model::{NewProduct, Product, ProductRequest};
use crate::utils::error::Result;
use crate::utils::validation;

pub struct ProductService<P> {
    products: P,
}

impl<P: ProductStore> ProductService<P> {
    pub fn new(products: P) -> Self {
        Self { products }
    }

    pub async fn create(&self, request: ProductRequest) -> Result<Product> {
        let price = validation::validate_price("product", request.price)?;
        validation::validate_non_empty_string("product name", &request.name)?;

        let product = self
            .products
            .save(NewProduct {
                name: request.name,
                price,
            })
            .await?;

        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.products.find_all().await
    }
}
