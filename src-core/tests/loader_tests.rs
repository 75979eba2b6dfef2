/// Tests for reading the cash book from disk

#[cfg(test)]
mod cashbook_loader_tests {
    use std::io::Write;
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use livrocaixa_core::cashbook::{load, load_with_mapping};
    use livrocaixa_core::{ColumnMapping, LoadError};
    use rust_decimal_macros::dec;
    use rust_xlsxwriter::{Format, Workbook};
    use tempfile::{Builder, NamedTempFile, TempDir};

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// Workbook with a "Resumo" sheet and a "Livro Caixa" sheet holding three sales
    fn xlsx_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("Livro-Caixa.xlsx");
        let date_fmt = Format::new().set_num_format("dd/mm/yyyy");
        let mut workbook = Workbook::new();

        workbook.add_worksheet().set_name("Resumo").unwrap();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Livro Caixa").unwrap();
        for (col, header) in ["Data do Pedido", "Valor Total", "Comissão", "Quantidade", "Cliente"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *header).unwrap();
        }

        // 45358 = 2024-03-07, stored as a formatted date cell
        sheet.write_number_with_format(1, 0, 45358, &date_fmt).unwrap();
        sheet.write_number(1, 1, 1500.5).unwrap();
        sheet.write_number(1, 2, 150).unwrap();
        sheet.write_number(1, 3, 3).unwrap();
        sheet.write_string(1, 4, "Ana").unwrap();

        // Bare serial number with text amounts
        sheet.write_number(2, 0, 45359).unwrap();
        sheet.write_string(2, 1, "1.234,56").unwrap();
        sheet.write_string(2, 2, "R$ 12,35").unwrap();
        sheet.write_number(2, 3, 1).unwrap();
        sheet.write_string(2, 4, "Bruno").unwrap();

        // Date typed as text, no client
        sheet.write_string(3, 0, "2024-04-01").unwrap();
        sheet.write_number(3, 1, 99).unwrap();
        sheet.write_number(3, 2, 9.9).unwrap();
        sheet.write_number(3, 3, 1).unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_loads_xlsx_sheet() {
        let dir = TempDir::new().unwrap();
        let path = xlsx_file(&dir);

        let cashbook = load(&path, "Livro Caixa").unwrap();
        assert_eq!(cashbook.len(), 3);
        assert!(cashbook.has_client_column());
        assert_eq!(cashbook.undated_count(), 0);

        let rows = cashbook.transactions();
        assert_eq!(rows[0].order_date, NaiveDate::from_ymd_opt(2024, 3, 7), "Formatted date cell");
        assert_eq!(rows[0].total_value, dec!(1500.5));
        assert_eq!(rows[0].commission, dec!(150));
        assert_eq!(rows[0].quantity, dec!(3));
        assert_eq!(rows[0].client.as_deref(), Some("Ana"));

        assert_eq!(rows[1].order_date, NaiveDate::from_ymd_opt(2024, 3, 8), "Bare serial number");
        assert_eq!(rows[1].total_value, dec!(1234.56));
        assert_eq!(rows[1].commission, dec!(12.35));

        assert_eq!(rows[2].order_date, NaiveDate::from_ymd_opt(2024, 4, 1), "Text date");
        assert_eq!(rows[2].client, None);

        let months: Vec<String> = cashbook
            .available_months()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2024-03", "2024-04"]);
    }

    #[test]
    fn test_missing_sheet_lists_available_sheets() {
        let dir = TempDir::new().unwrap();
        let path = xlsx_file(&dir);

        match load(&path, "Caixa 2023") {
            Err(LoadError::SheetNotFound { sheet, available }) => {
                assert_eq!(sheet, "Caixa 2023");
                assert_eq!(available, vec!["Resumo".to_string(), "Livro Caixa".to_string()]);
            }
            other => panic!("expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_latin1_csv_export() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"Data do Pedido,Valor Total,Comiss\xe3o,Quantidade,Cliente\n").unwrap();
        file.write_all(b"07/03/2024,100,10,1,Jo\xe3o\n").unwrap();
        file.flush().unwrap();

        let cashbook = load(file.path(), "").unwrap();
        assert_eq!(cashbook.len(), 1);
        assert_eq!(cashbook.transactions()[0].commission, dec!(10));
        assert_eq!(cashbook.transactions()[0].client.as_deref(), Some("João"));
    }

    #[test]
    fn test_loads_csv_with_brazilian_formats() {
        let file = csv_file(
            "Data do Pedido,Valor Total,Comissão,Quantidade,Cliente\n\
             07/03/2024,\"1.234,56\",\"123,45\",2,Ana\n\
             2024-03-08 10:00:00,R$ 500,50,1,Bruno\n\
             sem data,100,10,1,Carla\n\
             ,,,,\n",
        );

        let cashbook = load(file.path(), "ignored for csv").unwrap();

        assert_eq!(cashbook.len(), 3, "Blank row skipped, undated row kept");
        assert!(cashbook.has_client_column());
        assert_eq!(cashbook.undated_count(), 1);

        let first = &cashbook.transactions()[0];
        assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2024, 3, 7));
        assert_eq!(first.total_value, dec!(1234.56));
        assert_eq!(first.commission, dec!(123.45));
        assert_eq!(first.display_date().as_deref(), Some("07/03"));
        assert_eq!(first.client.as_deref(), Some("Ana"));

        assert_eq!(cashbook.transactions()[1].total_value, dec!(500));

        let months: Vec<String> = cashbook
            .available_months()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2024-03"]);
    }

    #[test]
    fn test_headers_match_ignoring_case_and_spaces() {
        let file = csv_file(
            " data do pedido ,VALOR TOTAL,comissão,quantidade\n\
             2024-01-31,10,1,1\n",
        );

        let cashbook = load(file.path(), "").unwrap();
        assert_eq!(cashbook.len(), 1);
        assert!(!cashbook.has_client_column(), "Client column is optional");
    }

    #[test]
    fn test_missing_required_column() {
        let file = csv_file("Data do Pedido,Valor Total,Quantidade\n2024-01-31,10,1\n");

        match load(file.path(), "") {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "Comissão"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_column_mapping() {
        let file = csv_file("date,amount,fee,qty,customer\n2024-06-03,42,4.2,3,Acme\n");
        let mapping = ColumnMapping {
            order_date: "date".into(),
            total_value: "amount".into(),
            commission: "fee".into(),
            quantity: "qty".into(),
            client: "customer".into(),
        };

        let cashbook = load_with_mapping(file.path(), "", &mapping).unwrap();
        let row = &cashbook.transactions()[0];
        assert_eq!(row.total_value, dec!(42));
        assert_eq!(row.commission, dec!(4.2));
        assert_eq!(row.quantity, dec!(3));
        assert_eq!(row.client.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/definitely/not/here/Livro-Caixa.xlsx");
        assert!(matches!(load(&path, "Livro Caixa"), Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "hello").unwrap();

        match load(file.path(), "") {
            Err(LoadError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_workbook_is_a_load_error() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();
        file.flush().unwrap();

        assert!(matches!(load(file.path(), "Livro Caixa"), Err(LoadError::Workbook(_))));
    }
}
