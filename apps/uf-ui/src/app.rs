use uf_app::{
    AppResult, ConversionOutcome, convert_input, convert_values, list_categories, list_history,
    list_units, record_conversion,
};
use uf_catalog::Category;
use uf_core::format_sig;
use uf_session::Session;

pub struct UnitflowApp {
    category: Category,
    multi_value: bool,
    single_value: f64,
    input_text: String,
    from_unit: &'static str,
    to_unit: &'static str,
    session: Session,
}

impl UnitflowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let category = Category::Length;
        let units = list_units(category);

        Self {
            category,
            multi_value: false,
            single_value: 1.0,
            input_text: "1.0".to_string(),
            from_unit: units[0],
            to_unit: units[0],
            session: Session::new(),
        }
    }

    fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        self.category = category;
        // Unit choices are scoped to the category; reset both selectors.
        let units = list_units(category);
        self.from_unit = units[0];
        self.to_unit = units[0];
    }

    fn compute(&self) -> AppResult<ConversionOutcome> {
        if self.multi_value {
            convert_input(
                self.category,
                &self.input_text,
                self.from_unit,
                self.to_unit,
            )
        } else {
            convert_values(
                self.category,
                &[self.single_value],
                self.from_unit,
                self.to_unit,
            )
        }
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(
            &mut self.multi_value,
            "Convert multiple values (comma separated)?",
        );

        if self.multi_value {
            ui.horizontal(|ui| {
                ui.label("Values:");
                ui.text_edit_singleline(&mut self.input_text);
            });
        } else {
            ui.horizontal(|ui| {
                ui.label("Value:");
                ui.add(egui::DragValue::new(&mut self.single_value).speed(0.1));
            });
        }

        let units = list_units(self.category);
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("From")
                .selected_text(self.from_unit)
                .show_ui(ui, |ui| {
                    for &unit in &units {
                        ui.selectable_value(&mut self.from_unit, unit, unit);
                    }
                });
            egui::ComboBox::from_label("To")
                .selected_text(self.to_unit)
                .show_ui(ui, |ui| {
                    for &unit in &units {
                        ui.selectable_value(&mut self.to_unit, unit, unit);
                    }
                });
        });
    }

    fn show_outcome(&mut self, ui: &mut egui::Ui, outcome: &ConversionOutcome) {
        ui.strong("Conversion Result");
        for result in &outcome.results {
            ui.monospace(format!(
                "{} {} = {} {}",
                format_sig(result.original, 6),
                self.from_unit,
                format_sig(result.converted, 6),
                self.to_unit
            ));
        }

        ui.add_space(4.0);
        ui.strong("Conversion Formula");
        ui.label(&outcome.formula);

        ui.add_space(8.0);
        if ui.button("Add to History").clicked() {
            record_conversion(
                &mut self.session,
                self.category,
                outcome,
                self.from_unit,
                self.to_unit,
            );
        }
    }

    fn show_history_table(&self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(110.0).at_least(80.0)) // Category
            .column(Column::remainder().at_least(150.0)) // From
            .column(Column::remainder().at_least(150.0)) // To
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Category");
                });
                header.col(|ui| {
                    ui.strong("From");
                });
                header.col(|ui| {
                    ui.strong("To");
                });
            })
            .body(|mut body| {
                for entry in list_history(&self.session) {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(entry.category.label());
                        });
                        row.col(|ui| {
                            ui.label(&entry.source);
                        });
                        row.col(|ui| {
                            ui.label(&entry.result);
                        });
                    });
                }
            });
    }
}

impl eframe::App for UnitflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("category_panel").show(ctx, |ui| {
            ui.heading("Category");
            ui.separator();
            for &category in list_categories() {
                if ui
                    .selectable_label(self.category == category, category.label())
                    .clicked()
                {
                    self.set_category(category);
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Advanced Unit Converter");
            ui.label("Convert between units of measurement, with multi-value input and a session history.");
            ui.separator();

            self.show_inputs(ui);
            ui.add_space(8.0);

            // Immediate mode: recompute from the current inputs every frame.
            match self.compute() {
                Ok(outcome) => self.show_outcome(ui, &outcome),
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                }
            }

            if !self.session.is_empty() {
                ui.add_space(12.0);
                ui.strong("Conversion History");
                egui::ScrollArea::vertical()
                    .id_salt("history_table_scroll")
                    .show(ui, |ui| {
                        self.show_history_table(ui);
                    });
            }
        });
    }
}
