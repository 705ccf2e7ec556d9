use super::cases_loader::{CaseEntry, CaseFailure, CaseResult, QueryCase, load_cases};
/// Case runner
///
/// Runs every bundled case and collects mismatches
use qsh::{QueryString, QueryStringHelper, UriCodec};

fn run_case(helper: &QueryStringHelper, case: &QueryCase) -> (String, String) {
    match case {
        QueryCase::Reconstruct { query, expected } => {
            let qs = QueryString::of(query.as_deref(), UriCodec);
            (qs.reconstruct_query_string(), expected.clone())
        }
        QueryCase::RemoveAllAndAdd {
            query,
            remove,
            add,
            expected,
        } => (
            helper.remove_all_and_add(query.as_deref(), remove, add.iter().cloned()),
            expected.clone(),
        ),
        QueryCase::RemoveNthAndAdd {
            query,
            remove,
            add,
            expected,
        } => (
            helper.remove_nth_and_add(query.as_deref(), remove, add.iter().cloned()),
            expected.clone(),
        ),
        QueryCase::AdjustNumericValueBy {
            query,
            key,
            indexes,
            delta,
            expected,
        } => (
            helper.adjust_numeric_value_by(query.as_deref(), key, indexes, *delta),
            expected.clone(),
        ),
        QueryCase::AdjustFirstNumericValueBy {
            query,
            key,
            delta,
            expected,
        } => (
            helper.adjust_first_numeric_value_by(query.as_deref(), key, *delta),
            expected.clone(),
        ),
    }
}

/// Run cases and return results
pub fn run_cases(entries: Vec<CaseEntry>) -> CaseResult {
    let helper = QueryStringHelper::new();
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for entry in entries {
        let CaseEntry::Case(case) = entry else {
            continue;
        };
        case_num += 1;

        let (actual, expected) = run_case(&helper, &case);
        if actual == expected {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(CaseFailure {
                case_num,
                op: case.name(),
                expected,
                actual,
            });
        }
    }

    result
}

#[test]
fn test_bundled_cases() {
    let result = run_cases(load_cases());
    for failure in &result.failures {
        eprintln!(
            "case #{} ({}): expected {:?}, got {:?}",
            failure.case_num, failure.op, failure.expected, failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
}
