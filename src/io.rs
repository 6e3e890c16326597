//! File front-end: item-name and transaction files in, rules and JSON out.
//!
//! Both input formats are comma-delimited. Carriage returns, newlines and
//! `$` are stripped from every name, and names left empty are skipped.

use crate::error::{Error, Result};
use crate::fp::{PrefixTree, Transaction};
use crate::pipeline::MiningResult;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

fn clean_name(raw: &str) -> Option<String> {
    let name: String = raw
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '$'))
        .collect();
    (!name.is_empty()).then_some(name)
}

pub fn parse_item_names(contents: &str) -> Vec<String> {
    contents.split(',').filter_map(clean_name).collect()
}

pub fn read_item_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_item_names(&contents))
}

/// `None` for a line with no items.
pub fn parse_transaction_line(line: &str) -> Option<Transaction<String>> {
    let transaction: Transaction<String> = line.split(',').filter_map(clean_name).collect();
    (!transaction.is_empty()).then_some(transaction)
}

/// Add every transaction in `reader` to `fp_tree`, one per line.
///
/// Returns the number of transactions added.
pub fn stream_transactions<R: BufRead>(reader: R, fp_tree: &mut PrefixTree<String>) -> Result<usize> {
    let mut num_transactions = 0;

    for line in reader.lines() {
        if let Some(transaction) = parse_transaction_line(&line?) {
            fp_tree.add_transaction(&transaction);
            num_transactions += 1;
        }
    }

    Ok(num_transactions)
}

pub fn load_transactions(path: impl AsRef<Path>) -> Result<(PrefixTree<String>, usize)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fp_tree = PrefixTree::new();
    let num_transactions = stream_transactions(BufReader::new(file), &mut fp_tree).map_err(|err| match err {
        Error::Read(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(
        path = %path.display(),
        transactions = num_transactions,
        tree_nodes = fp_tree.len(),
        "transactions loaded"
    );

    Ok((fp_tree, num_transactions))
}

pub fn write_report(path: impl AsRef<Path>, result: &MiningResult<String>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, result)?;
    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemset::{Itemset, Rule};
    use std::io::Cursor;

    #[test]
    fn test_parse_item_names_strips_special_characters() {
        let names = parse_item_names("Beer,Bread$,Diapers\r\n,,Milk\n");
        assert_eq!(names, vec!["Beer", "Bread", "Diapers", "Milk"]);
    }

    #[test]
    fn test_parse_transaction_line_sorts() {
        let transaction = parse_transaction_line("Milk,Beer,Bread\r").unwrap();
        assert_eq!(transaction.items(), &["Beer", "Bread", "Milk"]);
        assert!(parse_transaction_line("").is_none());
        assert!(parse_transaction_line("\r").is_none());
    }

    #[test]
    fn test_stream_transactions_skips_blank_lines() {
        let input = "a,b\n\nb,c\r\na\n";
        let mut tree = PrefixTree::new();
        let count = stream_transactions(Cursor::new(input), &mut tree).unwrap();

        assert_eq!(count, 3);
        assert_eq!(tree.support_count(&"a".to_string()), 2);
        assert_eq!(tree.support_count(&"b".to_string()), 2);
        assert_eq!(tree.support_count(&"c".to_string()), 1);
    }

    #[test]
    fn test_rule_rendering() {
        let rule = Rule::new(
            Itemset::new(vec!["Bread".to_string(), "Milk".to_string()]),
            Itemset::new(vec!["Diapers".to_string()]),
            0.8,
        );
        assert_eq!(rule.to_string(), "{ Bread, Milk } -> { Diapers } (confidence: 0.8)");

        let rule = Rule::new(
            Itemset::new(vec!["a".to_string()]),
            Itemset::new(vec!["b".to_string()]),
            2.0 / 3.0,
        );
        assert_eq!(rule.to_string(), "{ a } -> { b } (confidence: 0.67)");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_item_names("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
