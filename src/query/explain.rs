use crate::model::settings::Settings;
use crate::query::Query;

/// Explain a query block together with the vault-wide settings that
/// influence it.
///
/// The output format is stable (downstream tooling matches on it):
/// an optional global-filter sentence, an optional explanation of the
/// global query, then always the explanation of the block query itself,
/// separated by blank lines exactly as below.
pub fn explain_results(query: &Query, settings: &Settings) -> String {
    let mut result = String::new();

    if !settings.global_filter.is_empty() {
        result.push_str(&format!(
            "Only tasks containing the global filter '{}'.\n\n",
            settings.global_filter
        ));
    }

    let global_query = Query::from_source(&settings.global_query);
    if !global_query.source().is_empty() {
        result.push_str(&format!(
            "Explanation of the global query:\n\n{}\n",
            global_query.explain_query()
        ));
    }

    result.push_str(&format!(
        "Explanation of this Tasks code block query:\n\n{}",
        query.explain_query()
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explains_plain_query_without_settings() {
        let query = Query::from_source("");
        let settings = Settings::default();
        assert_eq!(
            explain_results(&query, &settings),
            "Explanation of this Tasks code block query:\n\n\
             No filters supplied. All tasks will match the query."
        );
    }

    #[test]
    fn test_explains_global_filter() {
        let query = Query::from_source("");
        let settings = Settings {
            global_filter: "#task".to_string(),
            ..Default::default()
        };
        assert_eq!(
            explain_results(&query, &settings),
            "Only tasks containing the global filter '#task'.\n\n\
             Explanation of this Tasks code block query:\n\n\
             No filters supplied. All tasks will match the query."
        );
    }

    #[test]
    fn test_global_query_section_ends_with_a_blank_line() {
        let query = Query::from_source("");
        let settings = Settings {
            global_query: "description includes hello".to_string(),
            ..Default::default()
        };
        assert_eq!(
            explain_results(&query, &settings),
            "Explanation of the global query:\n\n\
             description includes hello\n\n\
             Explanation of this Tasks code block query:\n\n\
             No filters supplied. All tasks will match the query."
        );
    }

    #[test]
    fn test_explains_global_query_and_block_query() {
        let query = Query::from_source("not done");
        let settings = Settings {
            global_filter: "#task".to_string(),
            global_query: "path includes work".to_string(),
            ..Default::default()
        };
        assert_eq!(
            explain_results(&query, &settings),
            "Only tasks containing the global filter '#task'.\n\n\
             Explanation of the global query:\n\n\
             path includes work\n\n\
             Explanation of this Tasks code block query:\n\n\
             not done\n"
        );
    }
}
