//! Integration tests for the xlsx2prn CLI

use std::path::{Path, PathBuf};
use std::process::Command;

use rust_xlsxwriter::{Format, Workbook};
use tempfile::TempDir;

const MSG_NO_INPUT: &str = "Arrastra un archivo Excel sobre el ejecutable.";
const MSG_INVALID_INPUT: &str = "El archivo no es válido. Asegúrate de que sea un Excel (.xlsx).";

fn run_xlsx2prn(args: &[&Path]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_xlsx2prn"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_workbook(dir: &Path, name: &str, rows: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

/// Names of the .prn and _info.txt files present in `dir`
fn outputs_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".prn") || name.ends_with("_info.txt"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_xlsx2prn"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("xlsx2prn"));
    assert!(stdout.contains(".xlsx"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_xlsx2prn"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("xlsx2prn"));
}

#[test]
fn test_no_argument() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_xlsx2prn"))
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.trim_end(), MSG_NO_INPUT);
    assert!(outputs_in(dir.path()).is_empty());
}

#[test]
fn test_successful_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), "people.xlsx", &[&["Name", "Age"], &["Al", "5"]]);

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);

    let prn_path = dir.path().join("people.prn");
    let info_path = dir.path().join("people_info.txt");
    let expected = format!(
        "Conversión exitosa. Archivos guardados en:\n{}\n{}",
        prn_path.display(),
        info_path.display()
    );
    assert_eq!(stdout.trim_end(), expected);

    let prn = std::fs::read_to_string(&prn_path).unwrap();
    assert_eq!(prn.lines().collect::<Vec<_>>(), vec!["Name Age ", "Al   5   "]);

    let info = std::fs::read_to_string(&info_path).unwrap();
    assert_eq!(
        info.lines().collect::<Vec<_>>(),
        vec!["Name  Inicio: 1  Longitud: 5", "Age  Inicio: 6  Longitud: 4"]
    );
}

#[test]
fn test_uppercase_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), "REPORTE.XLSX", &[&["Id"], &["7"]]);

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);
    assert!(stdout.starts_with("Conversión exitosa."));
    assert_eq!(outputs_in(dir.path()), vec!["REPORTE.prn", "REPORTE_info.txt"]);
}

#[test]
fn test_non_xlsx_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "Name,Age\nAl,5\n").unwrap();

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);
    assert_eq!(stdout.trim_end(), MSG_INVALID_INPUT);
    assert!(outputs_in(dir.path()).is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.xlsx");

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);
    assert_eq!(stdout.trim_end(), MSG_INVALID_INPUT);
    assert!(outputs_in(dir.path()).is_empty());
}

#[test]
fn test_corrupt_workbook() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.xlsx");
    std::fs::write(&input, "not a spreadsheet at all").unwrap();

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);
    assert!(stdout.starts_with("Error: "));
    assert!(stdout.contains("broken.xlsx"));
    assert!(outputs_in(dir.path()).is_empty());
}

#[test]
fn test_empty_worksheet() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blank.xlsx");
    let mut workbook = Workbook::new();
    let _ = workbook.add_worksheet();
    workbook.save(&input).unwrap();

    let (stdout, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);
    assert!(stdout.starts_with("Error: "));
    assert!(outputs_in(dir.path()).is_empty());
}

#[test]
fn test_repeat_conversion_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(
        dir.path(),
        "inventario.xlsx",
        &[
            &["Código", "Descripción", "Cantidad"],
            &["A-1", "Tornillo 3/8", "120"],
            &["B-22", "", "7"],
        ],
    );

    run_xlsx2prn(&[&input]);
    let prn = std::fs::read(dir.path().join("inventario.prn")).unwrap();
    let info = std::fs::read(dir.path().join("inventario_info.txt")).unwrap();

    run_xlsx2prn(&[&input]);
    assert_eq!(std::fs::read(dir.path().join("inventario.prn")).unwrap(), prn);
    assert_eq!(
        std::fs::read(dir.path().join("inventario_info.txt")).unwrap(),
        info
    );
}

#[test]
fn test_layout_offsets_match_prn_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(
        dir.path(),
        "clientes.xlsx",
        &[
            &["Nombre", "Ciudad", "Saldo"],
            &["Ana María", "Lima", "1500"],
            &["Luis", "Santiago de Chile", "-20"],
        ],
    );

    let (_, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);

    let info = std::fs::read_to_string(dir.path().join("clientes_info.txt")).unwrap();
    let prn = std::fs::read_to_string(dir.path().join("clientes.prn")).unwrap();
    let data_line: Vec<char> = prn.lines().nth(2).unwrap().chars().collect();

    let mut expected_start = 1;
    let mut fields = Vec::new();
    for line in info.lines() {
        let (_, rest) = line.split_once("  Inicio: ").unwrap();
        let (start, length) = rest.split_once("  Longitud: ").unwrap();
        let start: usize = start.parse().unwrap();
        let length: usize = length.parse().unwrap();
        assert_eq!(start, expected_start);
        expected_start += length;

        let field: String = data_line[start - 1..start - 1 + length].iter().collect();
        fields.push(field.trim_end().to_string());
    }
    assert_eq!(fields, vec!["Luis", "Santiago de Chile", "-20"]);
}

#[test]
fn test_numeric_and_date_cells() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pagos.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let date = rust_xlsxwriter::ExcelDateTime::from_ymd(2024, 2, 29).unwrap();
    worksheet.write_string(0, 0, "Fecha").unwrap();
    worksheet.write_string(0, 1, "Importe").unwrap();
    worksheet
        .write_datetime_with_format(1, 0, &date, &date_format)
        .unwrap();
    worksheet.write_number(1, 1, 99.9).unwrap();
    workbook.save(&input).unwrap();

    let (_, _, success) = run_xlsx2prn(&[&input]);
    assert!(success);

    let prn = std::fs::read_to_string(dir.path().join("pagos.prn")).unwrap();
    assert_eq!(
        prn.lines().collect::<Vec<_>>(),
        vec!["Fecha      Importe ", "2024-02-29 99.9    "]
    );
}

#[test]
fn test_only_first_of_several_files_is_converted() {
    let dir = TempDir::new().unwrap();
    let first = write_workbook(dir.path(), "enero.xlsx", &[&["Mes"], &["1"]]);
    let second = write_workbook(dir.path(), "febrero.xlsx", &[&["Mes"], &["2"]]);

    let (stdout, _, success) = run_xlsx2prn(&[&first, &second]);
    assert!(success);
    assert!(stdout.starts_with("Conversión exitosa."));
    assert_eq!(outputs_in(dir.path()), vec!["enero.prn", "enero_info.txt"]);
}

#[test]
fn test_file_name_starting_with_hyphen() {
    let dir = TempDir::new().unwrap();
    write_workbook(dir.path(), "-datos.xlsx", &[&["Id"], &["7"]]);

    let output = Command::new(env!("CARGO_BIN_EXE_xlsx2prn"))
        .arg("-datos.xlsx")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("Conversión exitosa."));
    assert_eq!(outputs_in(dir.path()), vec!["-datos.prn", "-datos_info.txt"]);

    let prn = std::fs::read_to_string(dir.path().join("-datos.prn")).unwrap();
    assert_eq!(prn.lines().collect::<Vec<_>>(), vec!["Id ", "7  "]);
}
