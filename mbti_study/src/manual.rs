/*!

This is the long-form manual for `mbti_study` and `studybuddy`.

## Study tips

```bash
studybuddy tips --type INFJ --plan --difficulty 어려움 --topic "영어 - 관계대명사"
```

The type must be one of the 16 codes, written in capital letters. Leaving it out
(or passing the placeholder `선택하세요`) shows an informational message instead of a
profile. Any other value is an error.

The plan is built from one of three templates, depending on the type:

| types                    | template                                                      |
|--------------------------|---------------------------------------------------------------|
| INTJ, ENTJ, ISTJ, ESTJ   | 목표 설정 5분, 핵심 개념 학습 15분, 문제 풀이 8분, 복습·요약 2분     |
| INFP, ENFP, ISFP, ESFP   | 흥미 유발 (짧은 영상) 5분, 핵심 활동 15분, 창의적 정리 6분, 짧은 복습 4분 |
| all the others           | 개념 정리 6분, 실습/문제풀이 18분, 오답 정리 4분, 자기평가 2분         |

With the hard difficulty (`어려움` or `hard`), the second step gets 5 more minutes.
This applies to every template.

## Country ranking

```bash
studybuddy rank --type INTJ --data countries.csv
```

### Input formats

The following formats are supported:
* `csv` Comma Separated Values, with a header row
* `xlsx` Excel spreadsheets (the first worksheet, unless `--excel-worksheet-name` is given)

The format is guessed from the extension of the file if `--input-type` is not given.

The file has one row per country. One column holds the name of the country, and its header must
be one of `country`, `countries`, `국가`, `국가명`, `country_name` (in any case). The other
columns that are named after a type (`INTJ`, `ENFP`, ...) hold the shares or counts of this
type in the country. Columns with other names are ignored.

```text
Country,INTJ,INTP,ENTJ,ENTP,INFJ,INFP,ENFJ,ENFP,ISTJ,ISFJ,ESTJ,ESFJ,ISTP,ISFP,ESTP,ESFP
Korea,0.04,0.05,0.02,0.03,0.03,0.09,0.02,0.07,0.11,0.10,0.07,0.08,0.06,0.09,0.04,0.10
```

Blank cells count as zero. Any other content that is not a non-negative number is an error.

### Computation

For every country, the ratio of a type is the value of this type divided by the sum of
all the type columns of the row. Countries are sorted by decreasing ratio (countries with the
same ratio keep the order of the file) and the first 10 are shown.

A country for which all the type columns are zero has no ratio. It is left out of the
ranking and listed separately. A file without any data row, or where every country
is in this case, is an error: there is nothing to rank.

A row whose values are too large to be added up is also an error.

### Data sources

The bundled file (`data/countries_mbti.csv` by default) is used if it exists. Otherwise, the file
passed with `--upload` is used. If neither is available, nothing is computed and an
informational message is shown.

## Configuration

`studybuddy` comes with sensible defaults but users may want to change them. The program
accepts a configuration file in JSON with `--config`:

```json
{
  "dataSources": [{ "provider": "csv", "filePath": "data/countries_mbti.csv" }],
  "uploadPath": null,
  "topK": 10,
  "excelWorksheetName": null,
  "outputFormat": "chart",
  "defaultTopic": "수학 - 이차방정식",
  "defaultDifficulty": "보통",
  "effects": { "gallery": true, "confetti": true },
  "gallerySeed": 0
}
```

All the fields are optional. The paths are relative to the directory of the configuration
file. Options passed on the command line take precedence over the configuration file.

 */
