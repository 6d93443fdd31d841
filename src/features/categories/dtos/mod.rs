mod category_dto;

pub use category_dto::{category_map, CategoriesDto, CategoryDetailDto, CategoryResponseDto};
