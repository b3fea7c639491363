pub(crate) mod rank_bits;
pub(crate) mod rank_counts;
pub(crate) mod rank_groups;
pub(crate) mod suit_info;

use crate::hand::Hand;
use core::cmp::Ordering;

pub use rank_bits::RankBits;
pub use rank_counts::RankCounts;

use rank_counts::NO_DUPLICATES;
use rank_groups::RankGroups;
use suit_info::SuitInfo;

/// Poker hand category from weakest to strongest. Category alone is the
/// primary sort key: a higher category beats a lower one regardless of
/// any card within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Closed mapping from the mod-15 duplicate signature to the category
    /// it fingerprints. `None` for 5 (no duplicates; suit and straight
    /// information decide) and for values no five-card hand produces.
    pub(crate) const fn from_duplicate_signature(sig: u8) -> Option<Category> {
        match sig {
            6 => Some(Category::Pair),
            7 => Some(Category::TwoPair),
            9 => Some(Category::ThreeOfAKind),
            10 => Some(Category::FullHouse),
            1 => Some(Category::FourOfAKind),
            _ => None,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result for one hand: the category plus the two
/// signatures the comparator needs. Computed fresh per call, never
/// cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandAnalysis {
    pub category: Category,
    /// Rank-presence mask; see [`RankBits`].
    pub rank_bits: RankBits,
    /// Mod-15 shape fingerprint; see [`RankCounts::duplicate_signature`].
    pub duplicate_signature: u8,
}

impl HandAnalysis {
    /// Human-readable category name.
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Classify a five-card hand.
///
/// Duplicate-bearing categories fall straight out of the shape signature
/// and never look at suits. Only duplicate-free hands go on to the
/// straight/flush branch, where royal flush > straight flush > flush >
/// straight > high card.
///
/// ```
/// use handrank::evaluator::{classify_five, Category};
/// use handrank::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js Ts".parse().unwrap();
/// let analysis = classify_five(&hand);
/// assert_eq!(analysis.category, Category::RoyalFlush);
/// assert_eq!(analysis.rank_bits.raw(), 0x7C00);
/// ```
pub fn classify_five(hand: &Hand) -> HandAnalysis {
    let ranks = hand.ranks();
    let rank_bits = RankBits::from_ranks(&ranks);
    let duplicate_signature = RankCounts::from_ranks(&ranks).duplicate_signature();

    if let Some(category) = Category::from_duplicate_signature(duplicate_signature) {
        return HandAnalysis { category, rank_bits, duplicate_signature };
    }

    debug_assert_eq!(duplicate_signature, NO_DUPLICATES);
    let is_flush = SuitInfo::detect(&hand.suits()).is_flush;
    let category = if is_flush && rank_bits.is_broadway() {
        Category::RoyalFlush
    } else if is_flush && rank_bits.is_straight() {
        Category::StraightFlush
    } else if is_flush {
        Category::Flush
    } else if rank_bits.is_straight() {
        Category::Straight
    } else {
        Category::HighCard
    };
    HandAnalysis { category, rank_bits, duplicate_signature }
}

/// Compare two five-card hands; `Greater` means the first hand is
/// stronger.
///
/// Category decides first. Within a category: royal flushes always tie
/// (no suit ranking); flush and high-card ties compare the rank mask
/// numerically; straights do the same after the wheel check (a wheel ties
/// a wheel and loses to every other straight, its ace bit notwithstanding);
/// duplicate-bearing categories compare their ordered tie-break ranks.
///
/// ```
/// use handrank::evaluator::compare_five;
/// use handrank::hand::Hand;
/// use std::cmp::Ordering;
///
/// let wheel: Hand = "2s As 4s 3s 5d".parse().unwrap();
/// let six_high: Hand = "4s 5c 7d 6s 3s".parse().unwrap();
/// assert_eq!(compare_five(&wheel, &six_high), Ordering::Less);
/// ```
pub fn compare_five(a: &Hand, b: &Hand) -> Ordering {
    let ea = classify_five(a);
    let eb = classify_five(b);
    if ea.category != eb.category {
        return ea.category.cmp(&eb.category);
    }

    match ea.category {
        Category::RoyalFlush => Ordering::Equal,
        Category::Flush | Category::HighCard => ea.rank_bits.cmp(&eb.rank_bits),
        Category::Straight | Category::StraightFlush => {
            match (ea.rank_bits.is_wheel(), eb.rank_bits.is_wheel()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => ea.rank_bits.cmp(&eb.rank_bits),
            }
        }
        category => {
            let ga = RankGroups::from_counts(RankCounts::from_ranks(&a.ranks()));
            let gb = RankGroups::from_counts(RankCounts::from_ranks(&b.ranks()));
            ga.tiebreaks(category).cmp(&gb.tiebreaks(category))
        }
    }
}
