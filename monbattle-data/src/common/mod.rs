mod fraction;

pub use fraction::Fraction;
