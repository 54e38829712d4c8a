use alloc::string::String;
use alloc::vec::Vec;
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// A uniform grid of clues, one row per category.
///
/// Serializes as its list of categories and deserializes back through
/// [`Board::from_categories`], so a decoded board is shape-checked too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Category>", try_from = "Vec<Category>")]
pub struct Board {
    titles: Vec<String>,
    clues: Array2<Clue>,
    answered_count: usize,
}

impl Board {
    /// Builds a board from assembled categories. Every category must carry the
    /// same, non-zero number of clues.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        let rows = categories.len();
        let cols = categories.first().map_or(0, |category| category.clues.len());
        if rows == 0 || cols == 0 {
            return Err(TriviaError::InvalidBoardShape);
        }
        if categories.iter().any(|category| category.clues.len() != cols) {
            return Err(TriviaError::InvalidBoardShape);
        }
        if Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err() {
            return Err(TriviaError::InvalidBoardShape);
        }

        let mut titles = Vec::with_capacity(rows);
        let mut flat = Vec::with_capacity(rows * cols);
        for Category { title, clues } in categories {
            titles.push(title);
            flat.extend(clues);
        }
        let answered_count = flat.iter().filter(|clue| clue.showing.is_terminal()).count();
        let clues = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|_| TriviaError::InvalidBoardShape)?;

        Ok(Self {
            titles,
            clues,
            answered_count,
        })
    }

    /// `(categories, clues per category)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.clues.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_clues(&self) -> usize {
        self.clues.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count == self.total_clues()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn category_title(&self, category: Coord) -> Result<&str> {
        self.titles
            .get(usize::from(category))
            .map(String::as_str)
            .ok_or(TriviaError::InvalidCoordinate)
    }

    pub fn category_clues(&self, category: Coord) -> Result<ArrayView1<'_, Clue>> {
        if category < self.size().0 {
            Ok(self.clues.index_axis(Axis(0), category.into()))
        } else {
            Err(TriviaError::InvalidCoordinate)
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(TriviaError::InvalidCoordinate)
        }
    }

    pub fn clue_at(&self, coords: Coord2) -> Result<&Clue> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.clues[coords.to_nd_index()])
    }

    pub fn showing_at(&self, coords: Coord2) -> Result<Showing> {
        self.clue_at(coords).map(Clue::showing)
    }

    pub fn content_at(&self, coords: Coord2) -> Result<CellContent<'_>> {
        self.clue_at(coords).map(Clue::content)
    }

    /// Advances the clue at `coords` one step: hidden to question, question to
    /// answer. Clues already showing their answer are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Reveal<'_>> {
        let coords = self.validate_coords(coords)?;
        let clue = &mut self.clues[coords.to_nd_index()];

        let previous = clue.showing;
        clue.showing = previous.next();
        if clue.showing == previous {
            return Ok(Reveal::Unchanged);
        }

        Ok(match clue.showing {
            Showing::Hidden => Reveal::Unchanged,
            Showing::Question => Reveal::Question(&clue.question),
            Showing::Answer => {
                self.answered_count += 1;
                Reveal::Answer(&clue.answer)
            }
        })
    }
}

impl TryFrom<Vec<Category>> for Board {
    type Error = TriviaError;

    fn try_from(categories: Vec<Category>) -> Result<Self> {
        Self::from_categories(categories)
    }
}

impl From<Board> for Vec<Category> {
    fn from(board: Board) -> Self {
        board
            .titles
            .into_iter()
            .zip(board.clues.outer_iter())
            .map(|(title, clues)| Category {
                title,
                clues: clues.to_vec(),
            })
            .collect()
    }
}
