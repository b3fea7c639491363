use super::rank_counts::RankCounts;
use super::Category;
use crate::cards::Rank;

/// Ranks bucketed by multiplicity, decoded from the nibble accumulator.
///
/// The accumulator is scanned from Ace downward, so every bucket comes out
/// ordered high-to-low with no sort step.
///
/// Example: AAAKQ yields trips = Ace, kickers = [King, Queen].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    quad: Option<Rank>,
    trips: Option<Rank>,
    pairs: Vec<Rank>,
    kickers: Vec<Rank>,
}

impl RankGroups {
    pub fn from_counts(counts: RankCounts) -> Self {
        let mut groups = RankGroups { quad: None, trips: None, pairs: Vec::new(), kickers: Vec::new() };
        for &rank in Rank::ALL.iter().rev() {
            match counts.count(rank) {
                0 => {}
                1 => groups.kickers.push(rank),
                2 => groups.pairs.push(rank),
                3 => groups.trips = Some(rank),
                _ => groups.quad = Some(rank),
            }
        }
        groups
    }

    pub fn quad(&self) -> Option<Rank> {
        self.quad
    }

    pub fn trips(&self) -> Option<Rank> {
        self.trips
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }

    /// Singleton ranks, highest first.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// Ordered tie-break ranks for a duplicate-bearing category, most
    /// significant first. Same-category hands compare these lists
    /// lexicographically.
    pub fn tiebreaks(&self, category: Category) -> Vec<Rank> {
        let mut out = Vec::with_capacity(4);
        match category {
            Category::FourOfAKind => {
                out.extend(self.quad);
                out.extend_from_slice(&self.kickers);
            }
            Category::FullHouse => {
                out.extend(self.trips);
                out.extend_from_slice(&self.pairs);
            }
            Category::ThreeOfAKind => {
                out.extend(self.trips);
                out.extend_from_slice(&self.kickers);
            }
            Category::TwoPair | Category::Pair => {
                out.extend_from_slice(&self.pairs);
                out.extend_from_slice(&self.kickers);
            }
            // kickers-only branch; reachable in principle but same-category
            // ties without duplicates are broken on the rank mask instead
            _ => out.extend_from_slice(&self.kickers),
        }
        out
    }
}
