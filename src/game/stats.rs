//! Per-player stat counters and the events that increment them.
//!
//! Every UI control maps to a `StatEvent` (player, category, outcome).
//! Shooting categories take `Made` or `Missed`; the simple counters only
//! take `Occurred`. A made shot always counts as an attempt, so
//! `made <= attempt` holds for each shooting pair.

use std::fmt;

use serde::Serialize;

use crate::game::error::GameError;

/// What a button records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TwoPoint,
    ThreePoint,
    FreeThrow,
    ReboundOff,
    ReboundDef,
    Assist,
    Turnover,
    Foul,
}

/// How a recorded event turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Made,
    Missed,
    Occurred,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::TwoPoint,
        Category::ThreePoint,
        Category::FreeThrow,
        Category::ReboundOff,
        Category::ReboundDef,
        Category::Assist,
        Category::Turnover,
        Category::Foul,
    ];

    pub const SHOOTING: [Category; 3] =
        [Category::TwoPoint, Category::ThreePoint, Category::FreeThrow];

    pub fn is_shooting(self) -> bool {
        matches!(
            self,
            Category::TwoPoint | Category::ThreePoint | Category::FreeThrow
        )
    }

    /// Form/query value used by the routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TwoPoint => "two_pt",
            Category::ThreePoint => "three_pt",
            Category::FreeThrow => "free_throw",
            Category::ReboundOff => "reb_off",
            Category::ReboundDef => "reb_def",
            Category::Assist => "assist",
            Category::Turnover => "turnover",
            Category::Foul => "foul",
        }
    }

    pub fn parse(s: &str) -> Result<Self, GameError> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GameError::UnknownCategory(s.to_string()))
    }

    /// Points credited for a made shot (0 for non-shooting categories).
    pub fn points(self) -> u32 {
        match self {
            Category::TwoPoint => 2,
            Category::ThreePoint => 3,
            Category::FreeThrow => 1,
            _ => 0,
        }
    }

    /// Short button label.
    pub fn label(self) -> &'static str {
        match self {
            Category::TwoPoint => "2pts",
            Category::ThreePoint => "3pts",
            Category::FreeThrow => "LF",
            Category::ReboundOff => "OFF",
            Category::ReboundDef => "DEF",
            Category::Assist => "AS",
            Category::Turnover => "BP",
            Category::Foul => "F",
        }
    }

    /// The only outcomes a category accepts.
    pub fn accepts(self, outcome: Outcome) -> bool {
        if self.is_shooting() {
            matches!(outcome, Outcome::Made | Outcome::Missed)
        } else {
            outcome == Outcome::Occurred
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Made => "made",
            Outcome::Missed => "missed",
            Outcome::Occurred => "occurred",
        }
    }

    /// Parse a form value. An empty value means a simple counter event.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        match s {
            "made" => Ok(Outcome::Made),
            "missed" => Ok(Outcome::Missed),
            "" | "occurred" => Ok(Outcome::Occurred),
            other => Err(GameError::UnknownOutcome(other.to_string())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded action, as carried by a UI control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEvent {
    pub player: String,
    pub category: Category,
    pub outcome: Outcome,
}

impl StatEvent {
    pub fn new(player: &str, category: Category, outcome: Outcome) -> Self {
        Self {
            player: player.to_string(),
            category,
            outcome,
        }
    }

    /// Build an event from raw form values.
    pub fn parse(player: &str, category: &str, outcome: &str) -> Result<Self, GameError> {
        let category = Category::parse(category)?;
        let outcome = Outcome::parse(outcome)?;
        if !category.accepts(outcome) {
            return Err(GameError::InvalidOutcome { category, outcome });
        }
        Ok(Self::new(player, category, outcome))
    }
}

/// Raw counters for one player. Everything else is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub two_pt_made: u32,
    pub two_pt_attempt: u32,
    pub three_pt_made: u32,
    pub three_pt_attempt: u32,
    pub ft_made: u32,
    pub ft_attempt: u32,
    pub rebounds_off: u32,
    pub rebounds_def: u32,
    pub assists: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl StatLine {
    /// Apply one event. Invalid category/outcome pairs leave the line untouched.
    pub fn apply(&mut self, category: Category, outcome: Outcome) -> Result<(), GameError> {
        if !category.accepts(outcome) {
            return Err(GameError::InvalidOutcome { category, outcome });
        }
        match category {
            Category::TwoPoint => shot(&mut self.two_pt_made, &mut self.two_pt_attempt, outcome),
            Category::ThreePoint => {
                shot(&mut self.three_pt_made, &mut self.three_pt_attempt, outcome)
            }
            Category::FreeThrow => shot(&mut self.ft_made, &mut self.ft_attempt, outcome),
            Category::ReboundOff => self.rebounds_off += 1,
            Category::ReboundDef => self.rebounds_def += 1,
            Category::Assist => self.assists += 1,
            Category::Turnover => self.turnovers += 1,
            Category::Foul => self.fouls += 1,
        }
        Ok(())
    }

    /// `(made, attempt)` for a shooting category, `None` otherwise.
    pub fn shooting(&self, category: Category) -> Option<(u32, u32)> {
        match category {
            Category::TwoPoint => Some((self.two_pt_made, self.two_pt_attempt)),
            Category::ThreePoint => Some((self.three_pt_made, self.three_pt_attempt)),
            Category::FreeThrow => Some((self.ft_made, self.ft_attempt)),
            _ => None,
        }
    }

    /// Single counter for a non-shooting category, `None` for shots.
    pub fn count(&self, category: Category) -> Option<u32> {
        match category {
            Category::ReboundOff => Some(self.rebounds_off),
            Category::ReboundDef => Some(self.rebounds_def),
            Category::Assist => Some(self.assists),
            Category::Turnover => Some(self.turnovers),
            Category::Foul => Some(self.fouls),
            _ => None,
        }
    }

    pub fn points(&self) -> u32 {
        Category::SHOOTING
            .into_iter()
            .filter_map(|c| self.shooting(c).map(|(made, _)| made * c.points()))
            .sum()
    }

    /// Field goals: two- and three-point shots combined.
    pub fn field_goals(&self) -> (u32, u32) {
        (
            self.two_pt_made + self.three_pt_made,
            self.two_pt_attempt + self.three_pt_attempt,
        )
    }

    pub fn rebounds_total(&self) -> u32 {
        self.rebounds_off + self.rebounds_def
    }
}

fn shot(made: &mut u32, attempt: &mut u32, outcome: Outcome) {
    if outcome == Outcome::Made {
        *made += 1;
    }
    *attempt += 1;
}
