pub mod experiences;
