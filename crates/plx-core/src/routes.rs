//! Client routes used as navigation targets.

/// Project list.
pub const HOME: &str = "/";

/// Detail view of one project.
#[must_use]
pub fn project_detail(project_id: &str) -> String {
    format!("/project/{project_id}")
}

/// Second creation step, carrying the first step's fields as a query string.
#[must_use]
pub fn create_step_two(query: &str) -> String {
    if query.is_empty() {
        String::from("/project/create")
    } else {
        format!("/project/create?{query}")
    }
}

/// Extract the query string from a step-two route, or pass a bare query through.
#[must_use]
pub fn draft_query(route_or_query: &str) -> &str {
    route_or_query
        .split_once('?')
        .map_or(route_or_query, |(_, query)| query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route() {
        assert_eq!(project_detail("p1"), "/project/p1");
    }

    #[test]
    fn step_two_route_roundtrips_query() {
        let route = create_step_two("project_name=demo&creator_name=ana");
        assert_eq!(route, "/project/create?project_name=demo&creator_name=ana");
        assert_eq!(draft_query(&route), "project_name=demo&creator_name=ana");
        assert_eq!(draft_query("project_name=demo"), "project_name=demo");
        assert_eq!(create_step_two(""), "/project/create");
    }
}
