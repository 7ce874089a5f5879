//! Insertion sort as a resumable step sequence

use super::step::{Highlight, Step};
use super::{out_of_order, Stepper};
use crate::dataset::Dataset;
use rustc_hash::FxHashMap;

/// Insertion sort state: `outer` is the element under placement, `pos` its
/// current slot while it walks left.
///
/// A resume performs at most one shift, then suspends; advancing to the
/// next outer element when no shift is needed does not yield a frame.
#[derive(Debug)]
pub struct InsertionStepper {
    ascending: bool,
    outer: usize,
    pos: usize,
}

impl InsertionStepper {
    pub fn new(ascending: bool) -> Self {
        InsertionStepper {
            ascending,
            outer: 1,
            pos: 1,
        }
    }
}

impl Stepper for InsertionStepper {
    fn advance(&mut self, data: &mut Dataset) -> Step {
        let n = data.len();
        while self.outer < n {
            let pos = self.pos;
            let values = data.values();
            if pos > 0 && out_of_order(values[pos - 1], values[pos], self.ascending) {
                data.swap(pos - 1, pos);
                self.pos = pos - 1;
                let mut highlight = FxHashMap::default();
                if self.pos > 0 {
                    highlight.insert(self.pos - 1, Highlight::Secondary);
                }
                highlight.insert(self.pos, Highlight::Primary);
                return Step::progress(highlight);
            }
            self.outer += 1;
            self.pos = self.outer;
        }
        Step::finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shift_per_resume() {
        let mut data = Dataset::from_values(vec![3, 5, 1]).expect("construction failed");
        let mut stepper = InsertionStepper::new(true);

        // 5 needs no shift; first pause is 1 walking past 5
        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert_eq!(data.values(), &[3, 1, 5]);
        assert_eq!(step.highlight.get(&0), Some(&Highlight::Secondary));
        assert_eq!(step.highlight.get(&1), Some(&Highlight::Primary));

        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert_eq!(data.values(), &[1, 3, 5]);
        // landed in slot 0: no left neighbour to mark
        assert_eq!(step.highlight.get(&0), Some(&Highlight::Primary));
        assert_eq!(step.highlight.len(), 1);

        let step = stepper.advance(&mut data);
        assert!(step.done);
        assert_eq!(data.values(), &[1, 3, 5]);
    }

    #[test]
    fn sorted_input_completes_on_first_resume() {
        let mut data = Dataset::from_values(vec![1, 2, 3, 4]).expect("construction failed");
        let mut stepper = InsertionStepper::new(true);

        let step = stepper.advance(&mut data);
        assert!(step.done);
        assert!(!step.mutated);
        assert_eq!(data.values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn descending_shifts_smaller_left_neighbours() {
        let mut data = Dataset::from_values(vec![1, 3, 2]).expect("construction failed");
        let mut stepper = InsertionStepper::new(false);

        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert_eq!(data.values(), &[3, 1, 2]);

        let step = stepper.advance(&mut data);
        assert!(step.mutated);
        assert_eq!(data.values(), &[3, 2, 1]);

        assert!(stepper.advance(&mut data).done);
    }

    #[test]
    fn single_element_is_already_done() {
        let mut data = Dataset::from_values(vec![9]).expect("construction failed");
        let mut stepper = InsertionStepper::new(true);
        assert!(stepper.advance(&mut data).done);
    }
}
