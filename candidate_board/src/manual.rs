/*!

This is the long-form manual for `candidate_board` and `candboard`.

## Input format

The input is one CSV document in UTF-8, typically the CSV export of a
Google Forms results spreadsheet. The first line is always the header
row; an input with fewer than two lines is rejected as malformed.

Fields are comma-separated. A field may be wrapped in double quotes, in
which case commas inside the quotes are literal. There is no
escaped-quote support and quoted fields may not span lines. Every field
is trimmed.

Headers are matched exactly against the known survey wordings (several
historical rewordings of the same question are recognized). Columns with
unknown headers are ignored, so adding columns to the spreadsheet is
safe. A data row is admitted only when it resolves a non-empty candidate
name; other rows are skipped with a warning and parsing continues.

## Publishing a Google Sheet as CSV

In the spreadsheet holding the form responses, use
`File > Share > Publish to web`, pick the responses sheet and the
`Comma-separated values (.csv)` format, then pass the generated link to
`candboard --url`.

```bash
candboard --url 'https://docs.google.com/spreadsheets/d/<id>/export?format=csv&gid=<gid>'
```

A downloaded CSV file works the same way through `--input`:

```bash
candboard --input responses.csv --filter incumbent --sort name
```

## Policy stances

Free-text stance answers are folded into a closed vocabulary
(積極的に推進, 賛成, 中立, 慎重, 反対, 未回答) by substring matching
against the survey phrasings, first match wins. Blank or unrecognized
answers count as 未回答. Every record carries a stance for every known
policy topic, so comparison views never deal with missing keys.

## Export

The JSON export written by `candboard` is the queried view: whatever
`--filter` and `--sort` selected, in that order. With the defaults
(`--filter all --sort name`) this is the full record sequence; pass a
narrower filter and the export narrows with it.

## Failure policy

When the source cannot be fetched, is malformed, or yields zero
admitted candidates, `candboard` falls back to a built-in sample set so
there is always something to render. The sample set is used whole or
not at all. Pass `--no-fallback` to get a typed error instead; the load
outcome always records whether the source was unavailable or merely
empty, so a front end can choose its own messaging.

*/
