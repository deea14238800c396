pub mod description;
pub mod extlinks;
pub mod link_groups;
pub mod media;
pub mod tag_translations;
