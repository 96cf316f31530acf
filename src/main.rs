// ==========================================
// Выбор подрядчика и поставщика - Точка входа
// ==========================================
// Консольный запуск пересчета обоих режимов по данным
// сессии. Данные подгружаются из табличных файлов
// (CSV/XLSX), при их отсутствии используются начальные
// ==========================================

use anyhow::{bail, Context, Result};

use supplier_choice::api::{
    error_lines, join_lines, render_contractor_outcome, render_supplier_outcome, to_json,
    warning_lines, ContractorApi, SupplierApi,
};
use supplier_choice::engine::Problems;
use supplier_choice::importer::{
    contractors_from_table, criteria_from_table, UniversalFileReader,
};
use supplier_choice::{i18n, logging, AppState};

// ==========================================
// Аргументы командной строки
// ==========================================
struct CliArgs {
    criteria_path: Option<String>,
    contractors_path: Option<String>,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = CliArgs {
            criteria_path: None,
            contractors_path: None,
            json: false,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--criteria" => {
                    args.criteria_path = Some(
                        iter.next()
                            .context("после --criteria ожидается путь к файлу")?,
                    );
                }
                "--contractors" => {
                    args.contractors_path = Some(
                        iter.next()
                            .context("после --contractors ожидается путь к файлу")?,
                    );
                }
                "--json" => args.json = true,
                other => bail!("неизвестный аргумент: {}", other),
            }
        }
        Ok(args)
    }
}

fn print_problems(problems: &Problems) {
    let errors = error_lines(problems);
    if !errors.is_empty() {
        println!("{}", i18n::t("report.errors_heading"));
        println!("{}", join_lines(&errors));
    }
    let warnings = warning_lines(problems);
    if !warnings.is_empty() {
        println!("{}", i18n::t("report.warnings_heading"));
        println!("{}", join_lines(&warnings));
    }
}

fn main() -> Result<()> {
    logging::init();

    // локаль берется из окружения, по умолчанию русский
    if let Ok(locale) = std::env::var("SUPPLIER_CHOICE_LOCALE") {
        i18n::set_locale(&locale);
    }

    tracing::info!("{} v{}", supplier_choice::APP_NAME, supplier_choice::VERSION);

    let args = CliArgs::parse()?;
    let mut state = AppState::with_seeds();

    // подмена начальных данных файлами, если они заданы
    if let Some(path) = &args.criteria_path {
        let table = UniversalFileReader
            .read(path)
            .with_context(|| format!("не удалось прочитать файл критериев: {}", path))?;
        state.expert_criteria = criteria_from_table(&table)
            .with_context(|| format!("не удалось разобрать критерии из файла: {}", path))?;
        tracing::info!(count = state.expert_criteria.len(), "критерии загружены");
    }
    if let Some(path) = &args.contractors_path {
        let table = UniversalFileReader
            .read(path)
            .with_context(|| format!("не удалось прочитать файл подрядчиков: {}", path))?;
        state.contractors = contractors_from_table(&state.expert_criteria, &table)
            .with_context(|| format!("не удалось разобрать подрядчиков из файла: {}", path))?;
        tracing::info!(count = state.contractors.len(), "подрядчики загружены");
    }

    let contractor_result = ContractorApi::run(&state)?;
    let supplier_result = SupplierApi::run(&state)?;

    if args.json {
        println!("{}", to_json(&contractor_result)?);
        println!("{}", to_json(&supplier_result)?);
        return Ok(());
    }

    print_problems(&contractor_result.criteria_problems);
    print_problems(&contractor_result.contractor_problems);
    if let Some(outcome) = &contractor_result.outcome {
        println!("{}", render_contractor_outcome(outcome));
    }

    print_problems(&supplier_result.criteria_problems);
    print_problems(&supplier_result.products_problems);
    print_problems(&supplier_result.period_problems);
    print_problems(&supplier_result.suppliers_problems);
    if let Some(outcome) = &supplier_result.outcome {
        println!("{}", render_supplier_outcome(outcome));
    }

    Ok(())
}
