//! Plain-text table rendering: schema fields as headers, records in dataset
//! order.

use kardex_core::{record::Record, schema::Schema};

/// Print records as an aligned table on stdout.
pub fn print(schema: &Schema, records: &[Record]) {
  let fields = schema.fields();

  // Column widths: the wider of header and cells.
  let widths: Vec<usize> = fields
    .iter()
    .map(|field| {
      records
        .iter()
        .map(|r| r.get(field).unwrap_or("").len())
        .chain(std::iter::once(field.len()))
        .max()
        .unwrap_or(0)
    })
    .collect();

  let header: Vec<String> = fields
    .iter()
    .zip(&widths)
    .map(|(field, &w)| format!("{field:<w$}"))
    .collect();
  println!("{}", header.join("  "));

  let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
  println!("{}", rule.join("  "));

  for record in records {
    let row: Vec<String> = fields
      .iter()
      .zip(&widths)
      .map(|(field, &w)| format!("{:<w$}", record.get(field).unwrap_or("")))
      .collect();
    println!("{}", row.join("  "));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Rendering itself goes to stdout; what we can check is the width logic
  // indirectly via the record accessors used above.
  #[test]
  fn missing_cells_render_as_empty() {
    let schema = Schema::new(["ID", "Name"], "ID").unwrap();
    let record = Record::from_pairs([("ID", "1")]);
    // Does not panic on records missing schema fields (e.g. after a
    // mismatched-schema restore).
    print(&schema, &[record]);
  }
}
