use crate::features::catalog::dto::vn_detail::LinkGroup;
use crate::features::catalog::model::extlink::ExtlinkRow;
use crate::features::catalog::utility::extlinks::ExternalLink;
use std::collections::HashMap;

/// Groups link rows by owning entity.
///
/// Groups appear in the order their owner is first seen; links keep row order.
/// The first row of an owner decides the group's display name.
pub fn group_links(rows: Vec<ExtlinkRow>) -> Vec<LinkGroup> {
    let mut groups: Vec<LinkGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let link = ExternalLink::new(row.site, row.value);

        match index.get(&row.owner_id) {
            Some(&position) => groups[position].links.push(link),
            None => {
                index.insert(row.owner_id.clone(), groups.len());
                groups.push(LinkGroup {
                    owner_id: row.owner_id,
                    owner_name: row.owner_name,
                    links: vec![link],
                });
            }
        }
    }

    groups
}
