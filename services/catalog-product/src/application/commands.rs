//! Product commands

use catalog_errors::{AppError, AppResult};

use crate::domain::entities::{NewProduct, ProductPatch};
use crate::domain::enums::Gender;
use crate::domain::value_objects::ProductId;

/// 标题最小长度（字符数）
pub const TITLE_MIN_CHARS: usize = 3;

/// 库存上限，与数据库 INT 列一致
pub const STOCK_MAX: i64 = i32::MAX as i64;

/// 创建商品命令
#[derive(Debug, Clone, Default)]
pub struct CreateProductCommand {
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: String,
    pub tags: Option<Vec<String>>,
}

impl CreateProductCommand {
    pub fn validate(&self) -> AppResult<()> {
        validate_title(&self.title)?;
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        self.gender.parse::<Gender>()?;
        Ok(())
    }

    /// 校验并转换为待插入的商品
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        self.validate()?;

        let gender = self.gender.parse::<Gender>()?;
        let stock = self.stock.map(to_stock).transpose()?.unwrap_or(0);

        Ok(NewProduct::new(self.title, self.slug.as_deref(), gender)
            .with_price(self.price.unwrap_or(0.0))
            .with_description(self.description)
            .with_stock(stock)
            .with_sizes(self.sizes.unwrap_or_default())
            .with_tags(self.tags.unwrap_or_default()))
    }
}

/// 更新商品命令
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateProductCommand {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            title: None,
            price: None,
            description: None,
            slug: None,
            stock: None,
            sizes: None,
            gender: None,
            tags: None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        if let Some(gender) = &self.gender {
            gender.parse::<Gender>()?;
        }
        Ok(())
    }

    /// 校验并拆分为 ID 和补丁
    pub fn into_patch(self) -> AppResult<(ProductId, ProductPatch)> {
        self.validate()?;

        let patch = ProductPatch {
            title: self.title,
            price: self.price,
            description: self.description,
            slug: self.slug,
            stock: self.stock.map(to_stock).transpose()?,
            sizes: self.sizes,
            gender: self.gender.as_deref().map(str::parse).transpose()?,
            tags: self.tags,
        };
        Ok((self.id, patch))
    }
}

fn validate_title(title: &str) -> AppResult<()> {
    if title.chars().count() < TITLE_MIN_CHARS {
        return Err(AppError::validation(format!(
            "title must be longer than or equal to {} characters",
            TITLE_MIN_CHARS
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(AppError::validation("price must not be less than 0"));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> AppResult<()> {
    if stock < 0 {
        return Err(AppError::validation("stock must not be less than 0"));
    }
    if stock > STOCK_MAX {
        return Err(AppError::validation(format!(
            "stock must not be greater than {}",
            STOCK_MAX
        )));
    }
    Ok(())
}

fn to_stock(stock: i64) -> AppResult<u32> {
    u32::try_from(stock).map_err(|_| AppError::validation("stock must not be less than 0"))
}
