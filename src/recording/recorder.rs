use super::sample::TrajectorySample;

/// Sink for trajectory samples. Receives one sample per fixed step once the
/// car is launched, in increasing order of elapsed time.
pub trait TrajectoryRecorder {
    fn add_sample(&mut self, sample: TrajectorySample);

    /// Called when the scene is reset. Keeps samples by default.
    fn reset(&mut self) {}
}

impl<R: TrajectoryRecorder + ?Sized> TrajectoryRecorder for &mut R {
    fn add_sample(&mut self, sample: TrajectorySample) {
        (**self).add_sample(sample);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<R: TrajectoryRecorder + ?Sized> TrajectoryRecorder for Box<R> {
    fn add_sample(&mut self, sample: TrajectorySample) {
        (**self).add_sample(sample);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Keeps every sample in memory. Cleared on reset, like a freshly loaded scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecorder {
    samples: Vec<TrajectorySample>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn into_samples(self) -> Vec<TrajectorySample> {
        self.samples
    }
}

impl TrajectoryRecorder for MemoryRecorder {
    fn add_sample(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Freedom, PhysicsBody};

    fn sample(elapsed: f64) -> TrajectorySample {
        let car = PhysicsBody::new(1.0, 0.15, Freedom::AXIAL);
        let bumper = PhysicsBody::new(1.0, 0.05, Freedom::AXIAL).at(-1.0);
        TrajectorySample::new(elapsed, &car, &bumper)
    }

    #[test]
    fn test_memory_recorder_appends_in_order() {
        let mut recorder = MemoryRecorder::new();
        assert!(recorder.is_empty());
        recorder.add_sample(sample(0.0));
        recorder.add_sample(sample(0.02));
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.samples()[0].elapsed, 0.0);
        assert_eq!(recorder.last().map(|s| s.elapsed), Some(0.02));
    }

    #[test]
    fn test_memory_recorder_reset_clears() {
        let mut recorder = MemoryRecorder::new();
        recorder.add_sample(sample(0.0));
        recorder.reset();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_recorder_through_mut_ref_and_box() {
        fn feed<R: TrajectoryRecorder>(mut recorder: R) {
            recorder.add_sample(sample(0.0));
        }

        let mut recorder = MemoryRecorder::new();
        feed(&mut recorder);
        assert_eq!(recorder.len(), 1);

        let boxed: Box<dyn TrajectoryRecorder> = Box::new(MemoryRecorder::new());
        feed(boxed);
    }

    #[derive(Default)]
    struct CountingRecorder {
        count: usize,
    }

    impl TrajectoryRecorder for CountingRecorder {
        fn add_sample(&mut self, _sample: TrajectorySample) {
            self.count += 1;
        }
    }

    #[test]
    fn test_default_reset_keeps_state() {
        let mut recorder = CountingRecorder::default();
        recorder.add_sample(sample(0.0));
        recorder.reset();
        assert_eq!(recorder.count, 1);
    }
}
