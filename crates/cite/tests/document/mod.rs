use super::*;

#[test]
fn test_fixture_loads_in_file_order() {
  let document = fixture_library();
  assert_eq!(document.len(), 5);
  let titles: Vec<&str> = document.records().iter().map(Record::title).collect();
  assert_eq!(titles[0], "Computing Machinery and Intelligence");
  assert_eq!(titles[4], "Anonymous Notes on the Analytical Engine");
}

#[test]
fn test_load_from_disk() -> TestResult<()> {
  let dir = tempdir()?;
  let path = dir.path().join("records.json");
  std::fs::write(&path, r#"[{ "title": "Dune", "author": ["Frank Herbert"] }]"#)?;

  let document = Document::from_path(&path)?;
  assert_eq!(document.records()[0].sort_key(), "Herbert");
  Ok(())
}

#[test]
fn test_missing_file() {
  let dir = tempdir().unwrap();
  let result = Document::from_path(dir.path().join("missing.json"));
  assert!(matches!(
      result,
      Err(CiteError::Path(e)) if e.kind() == std::io::ErrorKind::NotFound
  ));
}

#[test]
fn test_document_without_records() -> TestResult<()> {
  let dir = tempdir()?;
  let path = dir.path().join("loose.json");
  std::fs::write(&path, r#"{ "title": "Not a collection" }"#)?;

  let error = Document::from_path(&path).unwrap_err();
  assert!(matches!(error, CiteError::NoRecords));
  assert_eq!(error.to_string(), "Could not find any BibJSON records");
  Ok(())
}
