use std::collections::HashMap;

use newsverify::vectorizer::Norm;
use newsverify::{TfidfParams, TfidfVectorizer, Vectorize, VectorizerError};

const EPS: f64 = 1e-12;

fn params(terms: &[&str], idf: &[f64]) -> TfidfParams {
    let vocabulary: HashMap<String, usize> = terms.iter().enumerate().map(|(i, t)| (t.to_string(), i)).collect();
    TfidfParams::new(vocabulary, Some(idf.to_vec()))
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPS, "expected {}, got {}", expected, actual);
}

#[test]
fn test_l2_tfidf() -> Result<(), VectorizerError> {
    let vectorizer = TfidfVectorizer::from_params(params(&["fake", "news", "today"], &[1.0, 2.0, 3.0]))?;
    let rows = vectorizer.transform(&["Fake news, NEWS!"])?;

    // tf = [1, 2, 0], weighted = [1, 4, 0], |w| = sqrt(17)
    let norm = 17f64.sqrt();
    assert_eq!(rows.len(), 1);
    assert_close(rows[0].get(0), 1.0 / norm);
    assert_close(rows[0].get(1), 4.0 / norm);
    assert_eq!(rows[0].get(2), 0.0);
    assert_eq!(rows[0].nnz(), 2);
    Ok(())
}

#[test]
fn test_l1_tfidf() -> Result<(), VectorizerError> {
    let mut p = params(&["fake", "news"], &[1.0, 2.0]);
    p.norm = Some(Norm::L1);
    let vectorizer = TfidfVectorizer::from_params(p)?;
    let row = &vectorizer.transform(&["fake news news"])?[0];
    assert_close(row.get(0), 0.2);
    assert_close(row.get(1), 0.8);
    Ok(())
}

#[test]
fn test_unnormalized_sublinear() -> Result<(), VectorizerError> {
    let mut p = params(&["fake", "news"], &[1.0, 2.0]);
    p.norm = None;
    p.sublinear_tf = true;
    let vectorizer = TfidfVectorizer::from_params(p)?;
    let row = &vectorizer.transform(&["fake news news"])?[0];
    assert_close(row.get(0), 1.0);
    assert_close(row.get(1), (1.0 + 2f64.ln()) * 2.0);
    Ok(())
}

#[test]
fn test_plain_counts_without_idf() -> Result<(), VectorizerError> {
    let mut p = TfidfParams::new(
        [("fake".to_string(), 0), ("news".to_string(), 1)].into_iter().collect(),
        None,
    );
    p.norm = None;
    let vectorizer = TfidfVectorizer::from_params(p)?;
    let row = &vectorizer.transform(&["news fake news news"])?[0];
    assert_eq!(row.get(0), 1.0);
    assert_eq!(row.get(1), 3.0);
    Ok(())
}

#[test]
fn test_bigrams_and_stop_words() -> Result<(), VectorizerError> {
    let mut p = params(&["breaking", "news", "breaking news"], &[1.0, 1.0, 1.0]);
    p.ngram_range = (1, 2);
    p.stop_words = Some(vec!["the".to_string()]);
    p.norm = None;
    let vectorizer = TfidfVectorizer::from_params(p)?;

    let row = &vectorizer.transform(&["Breaking the news"])?[0];
    assert_eq!(row.get(0), 1.0);
    assert_eq!(row.get(1), 1.0);
    assert_eq!(row.get(2), 1.0);
    Ok(())
}

#[test]
fn test_case_sensitive_vocabulary() -> Result<(), VectorizerError> {
    let mut p = params(&["NASA"], &[1.0]);
    p.lowercase = false;
    let vectorizer = TfidfVectorizer::from_params(p)?;
    let rows = vectorizer.transform(&["NASA", "nasa"])?;
    assert_close(rows[0].get(0), 1.0);
    assert!(rows[1].is_zero());
    Ok(())
}

#[test]
fn test_batch_preserves_order_and_width() -> Result<(), VectorizerError> {
    let vectorizer = TfidfVectorizer::from_params(params(&["fake", "news"], &[1.0, 1.0]))?;
    let rows = vectorizer.transform(&["news", "", "fake"])?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.dimension() == 2));
    assert_close(rows[0].get(1), 1.0);
    assert!(rows[1].is_zero());
    assert_close(rows[2].get(0), 1.0);
    Ok(())
}

#[test]
fn test_empty_vocabulary_rejected() {
    let result = TfidfVectorizer::from_params(TfidfParams::new(HashMap::new(), None));
    assert!(matches!(result, Err(VectorizerError::ValidationError(_))));
}
