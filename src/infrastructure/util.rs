// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::post::text;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        text::slugify(input)
    }
}
