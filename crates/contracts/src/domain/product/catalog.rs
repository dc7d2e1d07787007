//! Parser for the bundled catalog file.
//!
//! The catalog ships as comma-separated text with optional double-quoted
//! fields: a quoted field may contain commas and line breaks, and a doubled
//! quote inside it stands for one literal quote. Exports carry both `\n` and
//! `\r\n` row terminators, sometimes within one file, so the parser accepts
//! either.

use super::aggregate::{normalize_category, Product};

/// Column order in the catalog file.
const COL_NAME: usize = 0;
const COL_CATEGORY: usize = 1;
const COL_IMAGE_URL: usize = 2;
const COL_DESCRIPTION: usize = 3;
const COL_PRICE: usize = 4;
const COL_URL: usize = 5;

/// Minimum fields a row needs before it can become a [`Product`].
const MIN_FIELDS: usize = 6;

/// Splits raw catalog text into rows of fields.
///
/// Single left-to-right scan, no backtracking. A row whose every field is
/// blank after trimming is dropped; trailing content without a final line
/// terminator still produces a row.
fn split_rows(input: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut inside_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if inside_quotes && chars.peek() == Some(&'"') {
                    // Удвоенная кавычка внутри поля — одна литеральная кавычка
                    field.push('"');
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            }
            ',' if !inside_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' if !inside_quotes => {
                row.push(std::mem::take(&mut field));
                close_row(&mut rows, &mut row);
            }
            '\r' if !inside_quotes && chars.peek() == Some(&'\n') => {
                chars.next();
                row.push(std::mem::take(&mut field));
                close_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        close_row(&mut rows, &mut row);
    }

    rows
}

/// Appends the pending row unless it is structurally blank.
fn close_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().any(|f| !f.trim().is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

/// Parses the raw catalog text into the ordered product list.
///
/// The first surviving row is the column header and yields no record. A data
/// row becomes a product only with at least [`MIN_FIELDS`] fields; shorter
/// rows are skipped silently, which leaves a gap in the id numbering — ids
/// carry the row position, not the record count. Malformed input never
/// fails; it degrades to fewer records.
pub fn parse_catalog(input: &str) -> Vec<Product> {
    let rows = split_rows(input);
    let mut products = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() < MIN_FIELDS {
            continue;
        }
        products.push(Product {
            id: format!("product-{index}"),
            name: row[COL_NAME].trim().to_string(),
            category: normalize_category(row[COL_CATEGORY].trim()),
            image_url: row[COL_IMAGE_URL].trim().to_string(),
            description: row[COL_DESCRIPTION].trim().to_string(),
            price: row[COL_PRICE].trim().to_string(),
            url: row[COL_URL].trim().to_string(),
        });
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Category,Image URL,Description,Price,Tokopedia URL\n";

    #[test]
    fn parses_plain_rows_in_order() {
        let input = format!(
            "{HEADER}Teak bench,Sofa,https://img/1.jpg,Solid teak,Rp1.000.000,https://shop/1\n\
             Patio set,Patio chairs,https://img/2.jpg,Weathered,Rp2.000.000,https://shop/2\n"
        );
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "product-1");
        assert_eq!(products[0].name, "Teak bench");
        assert_eq!(products[1].id, "product-2");
        assert_eq!(products[1].category, "Patio chairs");
    }

    #[test]
    fn quoted_field_keeps_separator_and_unescapes_doubled_quotes() {
        let input = format!(
            "{HEADER}\"Sofa, 3-seat \"\"Deluxe\"\"\",Sofa,,desc,Rp1.500.000,https://shop/3\n"
        );
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Sofa, 3-seat \"Deluxe\"");
    }

    #[test]
    fn quoted_field_may_contain_line_breaks() {
        let input = format!(
            "{HEADER}Bench,Sofa,,\"two\nlines\r\nhere\",Rp1.000,https://shop/4\n"
        );
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].description, "two\nlines\r\nhere");
    }

    #[test]
    fn trailing_row_without_terminator_is_emitted() {
        let input = format!("{HEADER}Bench,Sofa,,desc,Rp1.000,https://shop/5");
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].url, "https://shop/5");
    }

    #[test]
    fn crlf_and_lf_terminators_mix() {
        let input = format!(
            "{HEADER}A,Sofa,,d,Rp1,https://shop/a\r\nB,Sofa,,d,Rp2,https://shop/b\n"
        );
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A");
        assert_eq!(products[1].name, "B");
    }

    #[test]
    fn blank_rows_produce_no_records() {
        let input = format!("{HEADER},,,,,\n   , ,,,,\nBench,Sofa,,d,Rp1,u\n");
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        // Пустые строки отфильтрованы до нумерации, пропусков в id нет
        assert_eq!(products[0].id, "product-1");
    }

    #[test]
    fn short_rows_are_skipped_and_leave_id_gaps() {
        let input = format!("{HEADER}only,three,fields\nBench,Sofa,,d,Rp1,u\n");
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        // Row 1 had too few fields; the surviving record keeps its position.
        assert_eq!(products[0].id, "product-2");
    }

    #[test]
    fn header_row_is_discarded() {
        let products = parse_catalog(HEADER);
        assert!(products.is_empty());
    }

    #[test]
    fn quoted_empty_field_is_preserved_as_empty() {
        let input = format!("{HEADER}Bench,Sofa,\"\",desc,Rp1,u\n");
        let products = parse_catalog(&input);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].image_url, "");
    }

    #[test]
    fn fields_are_trimmed_and_category_normalized() {
        let input = format!("{HEADER}  Chair set ,  dinning chairs ,, desc ,Rp9.000.000, u \n");
        let products = parse_catalog(&input);
        assert_eq!(products[0].name, "Chair set");
        assert_eq!(products[0].category, "Dining chairs");
        assert_eq!(products[0].url, "u");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_catalog("").is_empty());
    }
}
