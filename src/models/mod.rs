mod section_kind;

pub use section_kind::SectionKind;
