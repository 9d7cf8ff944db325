mod sections;

pub use sections::SectionExtractor;
