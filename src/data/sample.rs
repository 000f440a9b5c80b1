use serde::{Serialize, Deserialize};

use crate::data::features::FeatureMap;
use crate::error::{PlaygroundError, Result};

/// One training example: a feature vector and its target vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { features, target }
    }
}

/// A labeled point in the `[-1, 1]²` plane, kept alongside its sample so it
/// can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub class: usize,
}

/// `classes` zeros with a 1 at `class`.
pub fn one_hot(class: usize, classes: usize) -> Vec<f64> {
    (0..classes).map(|i| if i == class { 1.0 } else { 0.0 }).collect()
}

/// Collected training data. Points are appended and removed from the end;
/// a stored sample is never modified.
#[derive(Debug, Clone)]
pub struct SampleSet {
    feature_map: FeatureMap,
    classes: usize,
    points: Vec<LabeledPoint>,
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(feature_map: FeatureMap, classes: usize) -> SampleSet {
        SampleSet { feature_map, classes, points: Vec::new(), samples: Vec::new() }
    }

    pub fn feature_map(&self) -> FeatureMap {
        self.feature_map
    }

    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Adds the point `(x, y)` labeled `class`, storing `(Φ(x, y), one_hot)`.
    pub fn push(&mut self, x: f64, y: f64, class: usize) -> Result<&Sample> {
        if class >= self.classes {
            return Err(PlaygroundError::validation(format!(
                "class {class} out of range, only {} classes",
                self.classes,
            )));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(PlaygroundError::validation(format!("point ({x}, {y}) is not finite")));
        }
        self.points.push(LabeledPoint { x, y, class });
        self.samples.push(Sample::new(self.feature_map.apply(x, y), one_hot(class, self.classes)));
        Ok(&self.samples[self.samples.len() - 1])
    }

    /// Removes the most recent point.
    pub fn pop(&mut self) -> Option<LabeledPoint> {
        self.samples.pop();
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_marks_single_class() {
        assert_eq!(one_hot(1, 3), vec![0.0, 1.0, 0.0]);
        assert_eq!(one_hot(0, 1), vec![1.0]);
    }

    #[test]
    fn push_builds_features_and_target() {
        let mut set = SampleSet::new(FeatureMap::Quadratic, 3);
        let sample = set.push(0.5, -0.5, 2).unwrap().clone();
        assert_eq!(sample.features, vec![0.5, -0.5, 0.25, 0.25, -0.25]);
        assert_eq!(sample.target, vec![0.0, 0.0, 1.0]);
        assert_eq!(set.points(), &[LabeledPoint { x: 0.5, y: -0.5, class: 2 }]);
    }

    #[test]
    fn pop_removes_last_point_only() {
        let mut set = SampleSet::new(FeatureMap::Linear, 2);
        set.push(0.1, 0.1, 0).unwrap();
        set.push(0.2, 0.2, 1).unwrap();
        assert_eq!(set.pop().map(|p| p.class), Some(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.samples()[0].features, vec![0.1, 0.1]);
        set.pop();
        assert!(set.is_empty());
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn clear_drops_points_and_samples() {
        let mut set = SampleSet::new(FeatureMap::Quadratic, 3);
        set.push(0.3, 0.3, 0).unwrap();
        set.push(-0.3, 0.3, 2).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(set.points().is_empty());
        set.push(0.1, 0.2, 1).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_unknown_class_and_bad_coordinates() {
        let mut set = SampleSet::new(FeatureMap::Quadratic, 3);
        assert!(matches!(set.push(0.0, 0.0, 3), Err(PlaygroundError::Validation(_))));
        assert!(set.push(f64::NAN, 0.0, 0).is_err());
        assert!(set.is_empty());
    }
}
