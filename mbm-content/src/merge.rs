use crate::domain::ContentRecord;
use crate::resolve::try_resolve;
use crate::table::StringTable;

/// Overlay keyed translations onto authored records.
///
/// Each translatable field is decided on its own: a field whose key resolves
/// in `table` takes the translation, any other keeps the authored text. Pass
/// the authored records every time; re-merging an already merged copy would
/// carry translations over from the previous locale.
#[must_use]
pub fn merge_translations<T: ContentRecord>(records: &[T], table: &StringTable) -> Vec<T> {
    records
        .iter()
        .map(|record| merge_record(record, table))
        .collect()
}

#[must_use]
pub fn merge_record<T: ContentRecord>(record: &T, table: &StringTable) -> T {
    let mut merged = record.clone();
    for field in merged.translatable_fields() {
        if let Some(text) = try_resolve(table, &field.key, None) {
            *field.value = text;
        }
    }
    merged
}

/// `(record id, translation key)` for every translatable field with no keyed
/// translation in `table`.
#[must_use]
pub fn untranslated_fields<T: ContentRecord>(
    records: &[T],
    table: &StringTable,
) -> Vec<(String, String)> {
    let mut missing = Vec::new();
    for record in records {
        let mut scratch = record.clone();
        let id = scratch.id().to_string();
        for field in scratch.translatable_fields() {
            if !table.contains(&field.key) {
                missing.push((id.clone(), field.key));
            }
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogPost, PortfolioItem};
    use serde_json::json;

    fn post(id: &str) -> BlogPost {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("{id} title"),
            "category": "Marketing",
            "excerpt": format!("{id} excerpt"),
            "content": "<p>body</p>"
        }))
        .unwrap()
    }

    #[test]
    fn fields_merge_independently() {
        let table = StringTable::from_value(json!({
            "blog": { "p1_title": "عنوان" }
        }));
        let merged = merge_translations(&[post("p1")], &table);
        assert_eq!(merged[0].title, "عنوان");
        assert_eq!(merged[0].excerpt, "p1 excerpt");
        assert_eq!(merged[0].id, "p1");
    }

    #[test]
    fn nested_group_does_not_count_as_translation() {
        let table = StringTable::from_value(json!({
            "blog": { "p1_title": { "nested": "x" } }
        }));
        let merged = merge_translations(&[post("p1")], &table);
        assert_eq!(merged[0].title, "p1 title");
    }

    #[test]
    fn portfolio_category_name_comes_from_shared_key() {
        let item: PortfolioItem = serde_json::from_value(json!({
            "id": "shop",
            "title": "Shop",
            "category": "web-design",
            "categoryName": "Web Design",
            "shortDescription": "Store"
        }))
        .unwrap();
        let table = StringTable::from_value(json!({
            "portfolio": { "category_web-design": "تصميم المواقع" }
        }));
        let merged = merge_record(&item, &table);
        assert_eq!(merged.category_name, "تصميم المواقع");
        assert_eq!(merged.category, "web-design");
    }

    #[test]
    fn blog_category_and_tags_fall_back_to_authored_labels() {
        let mut authored = post("p1");
        authored.tags = vec!["SEO".into(), "Local".into()];
        let table = StringTable::from_value(json!({
            "blog": { "category_Marketing": "التسويق", "tag_SEO": "تحسين البحث" }
        }));
        let merged = merge_record(&authored, &table);
        assert_eq!(merged.category_name, "التسويق");
        assert_eq!(merged.category, "Marketing");
        assert_eq!(merged.tags, vec!["تحسين البحث", "Local"]);

        let english = merge_record(&authored, &StringTable::empty());
        assert_eq!(english.category_name, "Marketing");
    }

    #[test]
    fn reports_untranslated_fields() {
        let table = StringTable::from_value(json!({
            "blog": {
                "p1_title": "t",
                "p1_excerpt": "e",
                "p1_content": "c",
                "category_Marketing": "تسويق"
            }
        }));
        let missing = untranslated_fields(&[post("p1")], &table);
        assert_eq!(
            missing,
            vec![("p1".to_string(), "blog.p1_author_role".to_string())]
        );
    }
}
