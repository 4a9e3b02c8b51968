use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Small PDF builder on top of `pdf-writer`: free text pages (receipts) and
/// paginated tables (espelho). Text uses Helvetica with WinAnsi encoding so
/// Portuguese accents render correctly.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Map text to WinAnsi bytes; characters outside Latin-1 become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

/// Rough Helvetica advance, good enough for centering and column sizing.
fn approx_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            row_h: 20.0,
            line_h: 17.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_title(&self, content: &mut Content, title: &str) -> f32 {
        let y = self.page_h - self.margin - 10.0;
        let x = ((self.page_w - approx_width(title, self.title_font_size)) / 2.0).max(self.margin);
        self.draw_text(content, x, y, self.title_font_size, title);
        y - 2.0 * self.line_h
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 6.0, font_size, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to the printable width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| approx_width(h, self.header_font_size) + 10.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(approx_width(cell, self.font_size) + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Single page: centered title, then one text line per entry. Empty
    /// strings leave a blank line; lines wider than the page are wrapped.
    pub fn write_lines(&mut self, title: &str, lines: &[String]) {
        let mut content = self.new_page();
        let mut y = self.draw_title(&mut content, title);

        let max_chars =
            ((self.page_w - 2.0 * self.margin) / (self.font_size * 0.52)).floor() as usize;

        for line in lines {
            for piece in textwrap::wrap(line, max_chars.max(10)) {
                self.draw_text(&mut content, self.margin, y, self.font_size, &piece);
                y -= self.line_h;
            }
            if line.is_empty() {
                y -= self.line_h;
            }
        }

        self.finalize_page(content);
    }

    /// Multi-page table. `preamble` lines are printed under the title on the
    /// first page only.
    pub fn write_table(
        &mut self,
        title: &str,
        preamble: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            let mut y = self.draw_title(&mut content, title);

            if page_idx == 1 {
                for line in preamble {
                    self.draw_text(&mut content, self.margin, y, self.font_size, line);
                    y -= self.line_h;
                }
                y -= self.line_h;
            }

            // header tabella
            self.fill_band(&mut content, y, table_w, 0.87);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            // Numero pagina
            let pg = format!("Página {}", page_idx);
            self.draw_text(
                &mut content,
                self.page_w - self.margin - 60.0,
                self.margin - 20.0,
                self.font_size,
                &pg,
            );

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    /// Build catalog + page tree and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }
}
