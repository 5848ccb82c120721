pub mod health;
pub mod storybook;
