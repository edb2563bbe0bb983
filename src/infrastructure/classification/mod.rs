mod woothee_classifier;

pub use woothee_classifier::WootheeClassifier;
