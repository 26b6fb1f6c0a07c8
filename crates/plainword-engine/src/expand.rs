// Second-stage expansion: resolve which backend actually runs the second
// search and append its findings to an accepted list.
//
// Generative infill has no meaningful second-stage query, so two
// substitutions apply: a requested infill second stage runs through the
// vector source instead, and an infill *first* stage expands through the
// vector source regardless of which second backend was requested.

use plainword_core::word::Word;
use tracing::debug;

use crate::pipeline::{SecondStage, SourceKind};
use crate::source::CandidateSource;

/// Backend that actually executes a second-stage search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSecond {
    Vector,
    Thesaurus,
}

/// Resolve the effective second-stage backend, or `None` when no second
/// stage should run.
pub fn resolve(first: SourceKind, second: SecondStage) -> Option<ResolvedSecond> {
    let resolved = match second {
        SecondStage::None => return None,
        SecondStage::Vector => ResolvedSecond::Vector,
        SecondStage::Thesaurus => ResolvedSecond::Thesaurus,
        SecondStage::Infill => {
            debug!("infill has no second-stage search; using the vector backend");
            ResolvedSecond::Vector
        }
    };
    if first == SourceKind::Infill && resolved != ResolvedSecond::Vector {
        debug!("infill first-stage results expand through the vector backend");
        return Some(ResolvedSecond::Vector);
    }
    Some(resolved)
}

/// Run one second-stage search from `seeds` and append the new words.
pub fn expand(backend: &dyn CandidateSource, seeds: &mut Vec<Word>, original: &Word) {
    let found = backend.second_search(seeds, original);
    seeds.extend(found);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_means_no_second_stage() {
        assert_eq!(resolve(SourceKind::Vector, SecondStage::None), None);
        assert_eq!(resolve(SourceKind::Infill, SecondStage::None), None);
    }

    #[test]
    fn plain_backends_resolve_to_themselves() {
        assert_eq!(
            resolve(SourceKind::Vector, SecondStage::Thesaurus),
            Some(ResolvedSecond::Thesaurus)
        );
        assert_eq!(
            resolve(SourceKind::Thesaurus, SecondStage::Vector),
            Some(ResolvedSecond::Vector)
        );
    }

    #[test]
    fn infill_second_stage_becomes_vector() {
        assert_eq!(
            resolve(SourceKind::Vector, SecondStage::Infill),
            Some(ResolvedSecond::Vector)
        );
    }

    #[test]
    fn infill_first_stage_always_expands_through_vector() {
        assert_eq!(
            resolve(SourceKind::Infill, SecondStage::Thesaurus),
            Some(ResolvedSecond::Vector)
        );
        assert_eq!(
            resolve(SourceKind::Infill, SecondStage::Vector),
            Some(ResolvedSecond::Vector)
        );
        assert_eq!(
            resolve(SourceKind::Infill, SecondStage::Infill),
            Some(ResolvedSecond::Vector)
        );
    }

    #[test]
    fn expand_appends_second_search_output() {
        struct FixedSource;

        impl CandidateSource for FixedSource {
            fn first_search(
                &self,
                _original: &Word,
                _sentence: &str,
            ) -> crate::source::SearchOutcome {
                crate::source::SearchOutcome::default()
            }

            fn second_search(&self, _seeds: &[Word], _original: &Word) -> Vec<Word> {
                vec![Word::new("graze", "NOUN")]
            }
        }

        let mut seeds = vec![Word::new("scratch", "NOUN")];
        expand(&FixedSource, &mut seeds, &Word::new("abrasion", "NOUN"));
        let surfaces: Vec<&str> = seeds.iter().map(|w| w.surface()).collect();
        assert_eq!(surfaces, vec!["scratch", "graze"]);
    }
}
