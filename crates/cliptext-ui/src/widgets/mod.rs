pub mod clip_text;
