use crate::prelude::*;

/// The gap between two printed layers.
const GUTTER: &str = "    ";

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {:?}, {:?}, {:?}, {:?}, {} }}",
            self.variant(),
            self.state(),
            self.to_move(),
            self.history(),
            self.cells().iter().map(|c| c.to_string()).collect::<String>()
        )
    }

    /// Pretty print, with every layer side by side:
    ///
    /// ```text
    ///    layer 0          layer 1      ...
    ///     0 1 2 3          0 1 2 3
    ///  0  . . . .       0  . x . .
    /// ```
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let layers = 0 .. self.variant().layers();
        let width = WIDTH;

        let header = layers.clone().map(|l| format!("   layer {}   ", l)).collect::<Vec<_>>();
        writeln!(f, "{}", header.join(GUTTER))?;

        let columns = (0 .. width).map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        let labels = layers.clone().map(|_| format!("    {}  ", columns)).collect::<Vec<_>>();
        writeln!(f, "{}", labels.join(GUTTER))?;

        for row in 0 .. width
        {
            let rendered = layers
                .clone()
                .map(|layer| {
                    let marks = (0 .. width)
                        .map(|col| self.cell(Coord::new(row, col, layer)).to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    format!(" {}  {}  ", row, marks)
                })
                .collect::<Vec<_>>();
            writeln!(f, "{}", rendered.join(GUTTER))?;
        }

        write!(f, "{} to move ({})", self.to_move(), self.state())
    }
}
