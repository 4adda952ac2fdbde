//! Step pricing.
//!
//! A [`CostModel`] prices a single move between adjacent cells given the
//! heading the traversal currently faces. [`HeadingCost`] charges for turns;
//! [`UniformCost`] charges 1 per step regardless of heading or weight.

use smallvec::{SmallVec, smallvec};
use wayfind_core::CellId;

use crate::direction::{Direction, Move};

/// Turn instructions for one step, always ending in [`Move::Forward`].
pub type TurnPath = SmallVec<[Move; 3]>;

/// Price of a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCost {
    /// Movement cost, excluding the weight of the entered cell.
    pub cost: u32,
    pub turns: TurnPath,
    /// Heading after the step.
    pub heading: Direction,
}

/// Pricing of moves between adjacent cells.
pub trait CostModel {
    /// Price the step from `from`, facing `heading`, onto the adjacent `to`.
    ///
    /// `None` when the cells are not adjacent.
    fn step(&self, heading: Option<Direction>, from: CellId, to: CellId) -> Option<StepCost>;

    /// Amount added to the tentative g-cost for `step` onto a cell of
    /// `weight`.
    fn charge(&self, step: &StepCost, weight: u32) -> u32 {
        step.cost.saturating_add(weight)
    }
}

/// Heading-aware pricing.
///
/// Going straight costs 1. Each rotation instruction adds 1: a 90° turn
/// costs 2 (`[turn, forward]`), a reversal costs 3 (`[turn, turn, forward]`,
/// both turns clockwise). With diagonal moves a 45° veer also adds 1, so
/// 45° costs 2 and 135° costs 3.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeadingCost;

impl HeadingCost {
    /// Instructions that rotate `heading` onto `to` and then step.
    pub fn turns(heading: Option<Direction>, to: Direction) -> TurnPath {
        let Some(heading) = heading else {
            return smallvec![Move::Forward];
        };
        let r = heading.rotation_to(to);
        let (turn, veer) = if r >= 0 {
            (Move::TurnRight, Move::VeerRight)
        } else {
            (Move::TurnLeft, Move::VeerLeft)
        };
        let r = r.unsigned_abs();
        let mut path = TurnPath::new();
        for _ in 0..r / 2 {
            path.push(turn);
        }
        if r % 2 == 1 {
            path.push(veer);
        }
        path.push(Move::Forward);
        path
    }
}

impl CostModel for HeadingCost {
    fn step(&self, heading: Option<Direction>, from: CellId, to: CellId) -> Option<StepCost> {
        let dir = Direction::between(from, to)?;
        let turns = Self::turns(heading, dir);
        Some(StepCost {
            cost: turns.len() as u32,
            turns,
            heading: dir,
        })
    }
}

/// Every step costs 1; heading and cell weight are ignored.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformCost;

impl CostModel for UniformCost {
    fn step(&self, _heading: Option<Direction>, from: CellId, to: CellId) -> Option<StepCost> {
        let dir = Direction::between(from, to)?;
        Some(StepCost {
            cost: 1,
            turns: smallvec![Move::Forward],
            heading: dir,
        })
    }

    fn charge(&self, _step: &StepCost, _weight: u32) -> u32 {
        1
    }
}
