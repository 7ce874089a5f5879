//! Bubble sort as a resumable step sequence

use super::step::{Highlight, Step};
use super::{out_of_order, Stepper};
use crate::dataset::Dataset;
use rustc_hash::FxHashMap;

/// Bubble sort state: outer pass `i`, inner cursor `j`.
///
/// A resume scans from the saved position until a swap happens, performs
/// it, and suspends.  Comparisons that do not swap are absorbed into the
/// same resume, so the visual pause lands only on swaps.
#[derive(Debug)]
pub struct BubbleStepper {
    ascending: bool,
    i: usize,
    j: usize,
}

impl BubbleStepper {
    pub fn new(ascending: bool) -> Self {
        BubbleStepper {
            ascending,
            i: 0,
            j: 0,
        }
    }
}

impl Stepper for BubbleStepper {
    fn advance(&mut self, data: &mut Dataset) -> Step {
        let n = data.len();
        while n >= 2 && self.i < n - 1 {
            if self.j < n - 1 - self.i {
                let j = self.j;
                self.j += 1;
                let values = data.values();
                if out_of_order(values[j], values[j + 1], self.ascending) {
                    data.swap(j, j + 1);
                    let mut highlight = FxHashMap::default();
                    highlight.insert(j, Highlight::Secondary);
                    highlight.insert(j + 1, Highlight::Primary);
                    return Step::progress(highlight);
                }
            } else {
                self.i += 1;
                self.j = 0;
            }
        }
        Step::finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_suspend_and_highlight_the_pair() {
        let mut data = Dataset::from_values(vec![5, 3, 8, 1]).expect("construction failed");
        let mut stepper = BubbleStepper::new(true);

        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert!(!step.done);
        assert_eq!(data.values(), &[3, 5, 8, 1]);
        assert_eq!(step.highlight.get(&0), Some(&Highlight::Secondary));
        assert_eq!(step.highlight.get(&1), Some(&Highlight::Primary));

        // 5 < 8 is scanned silently; the next pause is the 8/1 swap
        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert_eq!(data.values(), &[3, 5, 1, 8]);
        assert_eq!(step.highlight.get(&2), Some(&Highlight::Secondary));
        assert_eq!(step.highlight.get(&3), Some(&Highlight::Primary));
    }

    #[test]
    fn sorted_input_completes_on_first_resume() {
        let mut data = Dataset::from_values(vec![1, 2, 3, 4]).expect("construction failed");
        let mut stepper = BubbleStepper::new(true);

        let step = stepper.advance(&mut data);
        assert!(step.done);
        assert!(!step.mutated);
        assert!(step.highlight.is_empty());
        assert_eq!(data.values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn single_element_is_already_done() {
        let mut data = Dataset::from_values(vec![7]).expect("construction failed");
        let mut stepper = BubbleStepper::new(true);
        assert!(stepper.advance(&mut data).done);
    }

    #[test]
    fn equal_values_never_swap() {
        let mut data = Dataset::from_values(vec![4, 4, 4]).expect("construction failed");
        let mut stepper = BubbleStepper::new(true);
        assert!(stepper.advance(&mut data).done);
        let mut stepper = BubbleStepper::new(false);
        assert!(stepper.advance(&mut data).done);
    }
}
