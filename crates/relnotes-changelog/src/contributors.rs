//! Contributor tallies

use std::collections::HashMap;

use tracing::debug;

use relnotes_core::error::{ChangelogError, Result};

use crate::types::Contributor;

/// Commit counts per contributor, owned by the caller and fed by
/// [`add_contributors`] for each range read
pub type ContributorTally = HashMap<Contributor, usize>;

/// Count `email name` author lines into `tally`.
///
/// Only the first space separates the email; names may contain spaces.
pub fn add_contributors(raw: &str, tally: &mut ContributorTally) -> Result<()> {
    for line in raw.lines() {
        let (email, name) = line
            .split_once(' ')
            .ok_or_else(|| ChangelogError::InvalidAuthorLine(line.to_string()))?;

        let contributor = Contributor {
            name: name.to_string(),
            email: email.to_string(),
        };
        *tally.entry(contributor).or_insert(0) += 1;
    }
    Ok(())
}

/// Contributor names by commit count, descending, ties by name
pub fn order_contributors(tally: &ContributorTally) -> Vec<String> {
    let mut all: Vec<(&Contributor, usize)> = tally.iter().map(|(c, n)| (c, *n)).collect();
    all.sort_by(|(a, a_count), (b, b_count)| {
        b_count
            .cmp(a_count)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.email.cmp(&b.email))
    });

    all.into_iter()
        .map(|(c, count)| {
            debug!("Contributor: {} <{}> with {} commits", c.name, c.email, count);
            c.name.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_core::error::RelnotesError;

    fn contributor(name: &str, email: &str) -> Contributor {
        Contributor {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_add_contributors() {
        let mut tally = ContributorTally::new();
        add_contributors(
            "a@example.com Alice Example\nb@example.com Bob\na@example.com Alice Example\n",
            &mut tally,
        )
        .unwrap();

        assert_eq!(tally[&contributor("Alice Example", "a@example.com")], 2);
        assert_eq!(tally[&contributor("Bob", "b@example.com")], 1);
    }

    #[test]
    fn test_tally_accumulates_across_calls() {
        let mut tally = ContributorTally::new();
        add_contributors("a@example.com Alice\n", &mut tally).unwrap();
        add_contributors("a@example.com Alice\n", &mut tally).unwrap();
        assert_eq!(tally[&contributor("Alice", "a@example.com")], 2);
    }

    #[test]
    fn test_no_normalization() {
        let mut tally = ContributorTally::new();
        add_contributors("a@example.com Alice\nA@example.com Alice\n", &mut tally).unwrap();
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_invalid_author_line() {
        let mut tally = ContributorTally::new();
        let err = add_contributors("no-space-here\n", &mut tally).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Changelog(ChangelogError::InvalidAuthorLine(_))
        ));
    }

    #[test]
    fn test_order_contributors() {
        let mut tally = ContributorTally::new();
        tally.insert(contributor("C", "c@example.com"), 1);
        tally.insert(contributor("B", "b@example.com"), 3);
        tally.insert(contributor("A", "a@example.com"), 3);

        assert_eq!(order_contributors(&tally), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_order_empty() {
        assert!(order_contributors(&ContributorTally::new()).is_empty());
    }
}
