mod component;
mod steps;

pub use component::AnimatedSvg;
pub use steps::AnimationStep;
